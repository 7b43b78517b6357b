//! The population sink seam.
//!
//! Synthesis hands every finished person to a [`PopulationSink`].  The sink
//! decides what happens next: keep it in memory, stream it to a file, or
//! forward it to a transport simulator's own population container.

use crate::Person;

/// Receiver of synthesized persons.
pub trait PopulationSink {
    fn add_person(&mut self, person: Person);
}

/// In-memory population, in creation order.
#[derive(Clone, Debug, Default)]
pub struct Population {
    persons: Vec<Person>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    /// Drop all persons, e.g. before regenerating a scenario.
    pub fn clear(&mut self) {
        self.persons.clear();
    }
}

impl PopulationSink for Population {
    fn add_person(&mut self, person: Person) {
        self.persons.push(person);
    }
}

/// Forwarding impl so callers can pass `&mut sink` where a sink is taken by
/// value.
impl<S: PopulationSink + ?Sized> PopulationSink for &mut S {
    fn add_person(&mut self, person: Person) {
        (**self).add_person(person);
    }
}
