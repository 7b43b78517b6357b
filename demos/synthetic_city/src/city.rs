//! Built-in 3 × 3 district city.
//!
//! Districts are 2 km squares in a projected metre grid, surrounded by a
//! county outline that is not itself a district.  Network nodes sit every
//! 100 m, offset by half a step so none falls on a district edge.

use std::io::Cursor;

use anyhow::Result;

use sp_census::{CensusTable, DistrictBoundary, load_census_reader};
use sp_core::Point;
use sp_network::{NodeNetwork, NodeNetworkBuilder};

/// Enclosing outline listed among the boundaries; excluded when building.
pub const COUNTY: &str = "Landkreis";

const DISTRICT_SIZE_M: f64 = 2_000.0;
const NODE_SPACING_M:  f64 = 100.0;

/// Row-major from the south-west corner.
const DISTRICT_NAMES: [[&str; 3]; 3] = [
    ["Hafen",   "Altstadt",    "Gewerbepark"],
    ["Westend", "Mitte",       "Ostend"],
    ["Nordend", "Universitaet", "Waldsiedlung"],
];

// Inner districts are dense with jobs, outer ones are residential.
const CENSUS_CSV: &str = "\
name,inhabitants,workplaces\n\
Hafen,180,240\n\
Altstadt,220,260\n\
Gewerbepark,40,460\n\
Westend,310,90\n\
Mitte,260,520\n\
Ostend,290,110\n\
Nordend,340,60\n\
Universitaet,120,300\n\
Waldsiedlung,280,40\n\
";

pub fn census() -> Result<CensusTable> {
    Ok(load_census_reader(Cursor::new(CENSUS_CSV))?)
}

fn square(name: &str, x0: f64, y0: f64, size: f64) -> DistrictBoundary {
    DistrictBoundary::from_points(
        name,
        [
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ],
    )
}

/// County outline first, then the nine districts.
pub fn boundaries() -> Vec<DistrictBoundary> {
    let mut out = vec![square(COUNTY, -500.0, -500.0, 3.0 * DISTRICT_SIZE_M + 1_000.0)];
    for (row, names) in DISTRICT_NAMES.iter().enumerate() {
        for (col, name) in names.iter().enumerate() {
            out.push(square(
                name,
                col as f64 * DISTRICT_SIZE_M,
                row as f64 * DISTRICT_SIZE_M,
                DISTRICT_SIZE_M,
            ));
        }
    }
    out
}

pub fn network() -> NodeNetwork {
    let per_axis = (3.0 * DISTRICT_SIZE_M / NODE_SPACING_M) as usize;
    let mut b = NodeNetworkBuilder::with_capacity(per_axis * per_axis);
    for iy in 0..per_axis {
        for ix in 0..per_axis {
            b.add_node(Point::new(
                (ix as f64 + 0.5) * NODE_SPACING_M,
                (iy as f64 + 0.5) * NODE_SPACING_M,
            ));
        }
    }
    b.build()
}
