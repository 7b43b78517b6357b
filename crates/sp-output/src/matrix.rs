//! District-by-district matrix export.
//!
//! Creates two files in the caller's output directory:
//! - `distance_matrix.csv`: center-to-center distances in km
//! - `worker_matrix.csv`: commuter counts (home row → work column) plus
//!   each home district's inhabitants
//!
//! Rows and columns are ordered by district name.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Writer, WriterBuilder};
use log::info;

use sp_synth::City;

use crate::{DecimalFormat, OutputResult};

pub const DISTANCE_MATRIX_FILE: &str = "distance_matrix.csv";
pub const WORKER_MATRIX_FILE: &str = "worker_matrix.csv";

/// Network coordinates are metres; matrices report kilometres.
const METRES_TO_KM: f64 = 0.001;

/// Layout of both matrix files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixFormat {
    /// Field delimiter byte.
    pub delimiter:   u8,
    pub decimal:     DecimalFormat,
    /// Header of the worker matrix's trailing inhabitants column.
    pub total_label: String,
}

impl MatrixFormat {
    fn writer<W: Write>(&self, inner: W) -> Writer<W> {
        WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(inner)
    }
}

impl Default for MatrixFormat {
    fn default() -> Self {
        Self {
            delimiter:   b';',
            decimal:     DecimalFormat::default(),
            total_label: "Total".to_owned(),
        }
    }
}

// ── Distance matrix ───────────────────────────────────────────────────────────

/// Write `distance_matrix.csv` into `dir`.
pub fn write_distance_matrix(dir: &Path, city: &City, format: &MatrixFormat) -> OutputResult<()> {
    let path = dir.join(DISTANCE_MATRIX_FILE);
    write_distance_matrix_to(File::create(&path)?, city, format)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Write the distance matrix to any writer.
///
/// A cell is empty when either district has no boundary points.
pub fn write_distance_matrix_to<W: Write>(
    inner:  W,
    city:   &City,
    format: &MatrixFormat,
) -> OutputResult<()> {
    let districts = city.districts_by_name();
    let mut w = format.writer(inner);

    let mut header = vec![String::new()];
    header.extend(districts.iter().map(|d| d.name().to_owned()));
    w.write_record(&header)?;

    for from in &districts {
        let mut row = Vec::with_capacity(districts.len() + 1);
        row.push(from.name().to_owned());
        for to in &districts {
            let cell = match (from.center(), to.center()) {
                (Some(a), Some(b)) => format.decimal.format(a.distance(b) * METRES_TO_KM),
                _ => String::new(),
            };
            row.push(cell);
        }
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

// ── Worker matrix ─────────────────────────────────────────────────────────────

/// Write `worker_matrix.csv` into `dir`.
pub fn write_worker_matrix(dir: &Path, city: &City, format: &MatrixFormat) -> OutputResult<()> {
    let path = dir.join(WORKER_MATRIX_FILE);
    write_worker_matrix_to(File::create(&path)?, city, format)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Write the worker-flow matrix to any writer.
pub fn write_worker_matrix_to<W: Write>(
    inner:  W,
    city:   &City,
    format: &MatrixFormat,
) -> OutputResult<()> {
    let districts = city.districts_by_name();
    let mut w = format.writer(inner);

    let mut header = vec![String::new()];
    header.extend(districts.iter().map(|d| d.name().to_owned()));
    header.push(format.total_label.clone());
    w.write_record(&header)?;

    for home in &districts {
        let mut row = Vec::with_capacity(districts.len() + 2);
        row.push(home.name().to_owned());
        row.extend(districts.iter().map(|work| work.incoming_workers_from(home.name()).to_string()));
        row.push(home.census().inhabitants().to_string());
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}
