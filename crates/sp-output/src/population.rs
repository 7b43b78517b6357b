//! Population CSV backend.
//!
//! One row per activity:
//!
//! ```text
//! person_id,home_district,work_district,activity_index,activity,node_id,x,y,end_time,leg_mode
//! A_0,A,B,0,home,3,25,75,07:12:00,car
//! A_0,A,B,1,work,9,125,75,16:40:00,car
//! A_0,A,B,2,home,3,25,75,,
//! ```
//!
//! `leg_mode` is the mode of the leg leaving that activity; both it and
//! `end_time` are empty for the final activity.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use log::info;

use sp_plan::{Person, Population, PopulationSink};

use crate::{OutputError, OutputResult};

pub const POPULATION_FILE: &str = "population.csv";

const HEADER: [&str; 10] = [
    "person_id",
    "home_district",
    "work_district",
    "activity_index",
    "activity",
    "node_id",
    "x",
    "y",
    "end_time",
    "leg_mode",
];

/// Streams persons to CSV as they are synthesized.
///
/// `PopulationSink::add_person` cannot fail, so the first write error is
/// stored and returned by [`finish`](Self::finish); later persons are
/// dropped.
pub struct PopulationCsvWriter<W: Write> {
    writer:     Writer<W>,
    persons:    usize,
    last_error: Option<OutputError>,
}

impl PopulationCsvWriter<File> {
    /// Create `population.csv` in `dir` and write the header row.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        Self::new(File::create(dir.join(POPULATION_FILE))?)
    }
}

impl<W: Write> PopulationCsvWriter<W> {
    pub fn new(inner: W) -> OutputResult<Self> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer, persons: 0, last_error: None })
    }

    /// Persons written so far.
    pub fn persons(&self) -> usize {
        self.persons
    }

    pub fn write_person(&mut self, person: &Person) -> OutputResult<()> {
        let id = person.id.to_string();
        for (index, activity) in person.plan.activities().iter().enumerate() {
            self.writer.write_record(&[
                id.clone(),
                person.home_district.clone(),
                person.work_district.clone(),
                index.to_string(),
                activity.kind.as_str().to_owned(),
                activity.node.0.to_string(),
                activity.location.x.to_string(),
                activity.location.y.to_string(),
                activity.end_time.map(|t| t.to_string()).unwrap_or_default(),
                person
                    .plan
                    .leg_after(index)
                    .map(|leg| leg.mode.as_str().to_owned())
                    .unwrap_or_default(),
            ])?;
        }
        self.persons += 1;
        Ok(())
    }

    /// Flush, and report the first error encountered while streaming.
    pub fn finish(mut self) -> OutputResult<usize> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.persons)
    }
}

impl<W: Write> PopulationSink for PopulationCsvWriter<W> {
    fn add_person(&mut self, person: Person) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = self.write_person(&person) {
            self.last_error = Some(e);
        }
    }
}

/// Write an in-memory population to `population.csv` in `dir`.
pub fn write_population_csv(dir: &Path, population: &Population) -> OutputResult<usize> {
    let mut w = PopulationCsvWriter::create(dir)?;
    for person in population.iter() {
        w.write_person(person)?;
    }
    let n = w.finish()?;
    info!("wrote {n} persons to {}", dir.join(POPULATION_FILE).display());
    Ok(n)
}
