//! Name-keyed census lookup.

use std::collections::HashMap;

use crate::{Census, CensusError, CensusResult};

/// All census records of a city, keyed by district name.
///
/// Iteration follows insertion order so loaded tables round-trip in file
/// order.
#[derive(Clone, Debug, Default)]
pub struct CensusTable {
    records: Vec<Census>,
    by_name: HashMap<String, usize>,
}

impl CensusTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, rejecting duplicate district names.
    pub fn from_records(records: impl IntoIterator<Item = Census>) -> CensusResult<Self> {
        let mut table = Self::new();
        for census in records {
            table.insert(census)?;
        }
        Ok(table)
    }

    /// Add one record.  Fails if the name is already present.
    pub fn insert(&mut self, census: Census) -> CensusResult<()> {
        if self.by_name.contains_key(census.name()) {
            return Err(CensusError::DuplicateEntry(census.name().to_owned()));
        }
        self.by_name.insert(census.name().to_owned(), self.records.len());
        self.records.push(census);
        Ok(())
    }

    /// Exact-match lookup by district name.
    pub fn find(&self, name: &str) -> CensusResult<&Census> {
        self.get(name)
            .ok_or_else(|| CensusError::DistrictNotFound(name.to_owned()))
    }

    pub fn get(&self, name: &str) -> Option<&Census> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Census> {
        self.records.iter()
    }

    pub fn total_inhabitants(&self) -> u64 {
        self.records.iter().map(|c| c.inhabitants() as u64).sum()
    }

    pub fn total_workplaces(&self) -> u64 {
        self.records.iter().map(|c| c.workplaces() as u64).sum()
    }

    /// A new table with every record scaled down by `factor`.
    pub fn scaled(&self, factor: u32) -> CensusTable {
        CensusTable {
            records: self.records.iter().map(|c| c.scaled(factor)).collect(),
            by_name: self.by_name.clone(),
        }
    }
}
