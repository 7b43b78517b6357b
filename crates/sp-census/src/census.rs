//! Per-district census record.

/// Inhabitant and workplace counts of one district.
///
/// Immutable once built; equality compares all three fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Census {
    name:        String,
    inhabitants: u32,
    workplaces:  u32,
}

impl Census {
    pub fn new(name: impl Into<String>, inhabitants: u32, workplaces: u32) -> Self {
        Self { name: name.into(), inhabitants, workplaces }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inhabitants(&self) -> u32 {
        self.inhabitants
    }

    pub fn workplaces(&self) -> u32 {
        self.workplaces
    }

    /// Copy with both counts integer-divided by `factor` (rounding down).
    ///
    /// Used to derive small test populations from real census figures.
    /// A `factor` of 0 is treated as 1.
    pub fn scaled(&self, factor: u32) -> Census {
        let factor = factor.max(1);
        Census {
            name:        self.name.clone(),
            inhabitants: self.inhabitants / factor,
            workplaces:  self.workplaces / factor,
        }
    }
}
