//! `sp-network` — the network nodes that anchor activity locations.
//!
//! Only node positions matter for population synthesis; links, capacities
//! and routing belong to the downstream transport simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Node`, `NodeNetwork` (positions + R-tree), `NodeNetworkBuilder` |
//! | [`loader`]  | `load_nodes_csv`, `load_nodes_reader`                       |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |

pub mod error;
pub mod loader;
pub mod network;


pub use error::{NetworkError, NetworkResult};
pub use loader::{load_nodes_csv, load_nodes_reader};
pub use network::{Node, NodeNetwork, NodeNetworkBuilder};
