//! `sp-output` — file outputs of a synthesis run.
//!
//! | Module         | Files created                                      |
//! |----------------|----------------------------------------------------|
//! | [`matrix`]     | `distance_matrix.csv`, `worker_matrix.csv`         |
//! | [`population`] | `population.csv`                                   |
//!
//! Matrix cells use [`DecimalFormat`] so the files open directly in
//! spreadsheet tools configured for a `,` decimal separator.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{MatrixFormat, PopulationCsvWriter, write_distance_matrix, write_worker_matrix};
//!
//! let mut sink = PopulationCsvWriter::create(Path::new("./output"))?;
//! city.synthesize_population(&factory, config.home_selection, &mut rng, &mut sink)?;
//! sink.finish()?;
//!
//! let format = MatrixFormat::default();
//! write_distance_matrix(Path::new("./output"), &city, &format)?;
//! write_worker_matrix(Path::new("./output"), &city, &format)?;
//! ```

pub mod decimal;
pub mod error;
pub mod matrix;
pub mod population;


pub use decimal::DecimalFormat;
pub use error::{OutputError, OutputResult};
pub use matrix::{
    DISTANCE_MATRIX_FILE, MatrixFormat, WORKER_MATRIX_FILE, write_distance_matrix,
    write_distance_matrix_to, write_worker_matrix, write_worker_matrix_to,
};
pub use population::{POPULATION_FILE, PopulationCsvWriter, write_population_csv};
