//! CSV node loader.
//!
//! ```csv
//! x,y
//! 457210.5,5428934.0
//! 457890.1,5429011.7
//! ```
//!
//! Coordinates must already be projected.  Node ids follow row order: the
//! first data row becomes `NodeId(0)`.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use sp_core::Point;

use crate::{NetworkError, NetworkResult, NodeNetwork, NodeNetworkBuilder};

#[derive(Deserialize)]
struct NodeRecord {
    x: f64,
    y: f64,
}

/// Load a [`NodeNetwork`] from a CSV file.
pub fn load_nodes_csv(path: &Path) -> NetworkResult<NodeNetwork> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_nodes_reader(file)
}

/// Like [`load_nodes_csv`] but accepts any `Read` source.
pub fn load_nodes_reader<R: Read>(reader: R) -> NetworkResult<NodeNetwork> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = NodeNetworkBuilder::new();

    for result in csv_reader.deserialize::<NodeRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        if !row.x.is_finite() || !row.y.is_finite() {
            return Err(NetworkError::Parse(format!(
                "non-finite coordinate in node row {}",
                builder.node_count()
            )));
        }
        builder.add_node(Point::new(row.x, row.y));
    }

    debug!("loaded {} network nodes", builder.node_count());
    Ok(builder.build())
}
