//! `sp-census` — what a city's districts look like before any node is placed.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`census`]   | `Census` (immutable inhabitants/workplaces record)        |
//! | [`table`]    | `CensusTable` (name → `Census` lookup)                    |
//! | [`boundary`] | `DistrictBoundary` (named polygon source record)          |
//! | [`loader`]   | `load_census_csv`, `load_boundaries_csv` (+ reader forms) |
//! | [`error`]    | `CensusError`, `CensusResult<T>`                          |

pub mod boundary;
pub mod census;
pub mod error;
pub mod loader;
pub mod table;


pub use boundary::DistrictBoundary;
pub use census::Census;
pub use error::{CensusError, CensusResult};
pub use loader::{load_boundaries_csv, load_boundaries_reader, load_census_csv, load_census_reader};
pub use table::CensusTable;
