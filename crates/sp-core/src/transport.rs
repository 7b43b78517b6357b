//! Leg transport mode.
//!
//! Synthesized commutes default to `Car`; the mode is configurable so that
//! downstream simulators can be fed walk, bike or public-transport legs.

use std::str::FromStr;

use crate::CoreError;

/// The means by which a leg is travelled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportMode {
    /// Private vehicle.
    #[default]
    Car,
    /// On foot.
    Walk,
    /// Bicycle.
    Bike,
    /// Scheduled public transport.
    Pt,
}

impl TransportMode {
    /// Label used in population files.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car  => "car",
            TransportMode::Walk => "walk",
            TransportMode::Bike => "bike",
            TransportMode::Pt   => "pt",
        }
    }
}

impl FromStr for TransportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "car"  => Ok(TransportMode::Car),
            "walk" => Ok(TransportMode::Walk),
            "bike" => Ok(TransportMode::Bike),
            "pt"   => Ok(TransportMode::Pt),
            other  => Err(CoreError::UnknownMode(other.to_owned())),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
