//! CSV census and boundary loaders.
//!
//! # Census CSV
//!
//! ```csv
//! name,inhabitants,workplaces
//! Innenstadt Ost,93,29
//! Oststadt,305,229
//! ```
//!
//! # Boundary CSV
//!
//! One row per polygon vertex, in ring order.  Rows of one district need not
//! be contiguous; districts are emitted in order of first appearance.
//!
//! ```csv
//! district,x,y
//! Oststadt,457210.5,5428934.0
//! Oststadt,457890.1,5429011.7
//! Oststadt,,
//! Oststadt,457950.0,5428100.2
//! ```
//!
//! A row with an empty `x` or `y` becomes a missing point (`None`), which the
//! district silently skips.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use sp_core::Point;

use crate::{Census, CensusError, CensusResult, CensusTable, DistrictBoundary};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CensusRecord {
    name:        String,
    inhabitants: u32,
    workplaces:  u32,
}

#[derive(Deserialize)]
struct BoundaryRecord {
    district: String,
    x:        Option<f64>,
    y:        Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CensusTable`] from a CSV file.
pub fn load_census_csv(path: &Path) -> CensusResult<CensusTable> {
    let file = std::fs::File::open(path).map_err(CensusError::Io)?;
    load_census_reader(file)
}

/// Like [`load_census_csv`] but accepts any `Read` source.
pub fn load_census_reader<R: Read>(reader: R) -> CensusResult<CensusTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = CensusTable::new();

    for result in csv_reader.deserialize::<CensusRecord>() {
        let row = result.map_err(|e| CensusError::Parse(e.to_string()))?;
        table.insert(Census::new(row.name.trim(), row.inhabitants, row.workplaces))?;
    }

    debug!(
        "loaded census for {} districts ({} inhabitants, {} workplaces)",
        table.len(),
        table.total_inhabitants(),
        table.total_workplaces()
    );
    Ok(table)
}

/// Load district boundaries from a CSV file.
pub fn load_boundaries_csv(path: &Path) -> CensusResult<Vec<DistrictBoundary>> {
    let file = std::fs::File::open(path).map_err(CensusError::Io)?;
    load_boundaries_reader(file)
}

/// Like [`load_boundaries_csv`] but accepts any `Read` source.
pub fn load_boundaries_reader<R: Read>(reader: R) -> CensusResult<Vec<DistrictBoundary>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut boundaries: Vec<DistrictBoundary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.deserialize::<BoundaryRecord>() {
        let row = result.map_err(|e| CensusError::Parse(e.to_string()))?;
        let name = row.district.trim();
        if name.is_empty() {
            return Err(CensusError::Parse("boundary row without district name".to_owned()));
        }

        let slot = match index.get(name) {
            Some(&i) => i,
            None => {
                index.insert(name.to_owned(), boundaries.len());
                boundaries.push(DistrictBoundary::new(name));
                boundaries.len() - 1
            }
        };

        let point = match (row.x, row.y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        };
        boundaries[slot].points.push(point);
    }

    debug!("loaded {} district boundaries", boundaries.len());
    Ok(boundaries)
}
