//! Synthesis configuration.
//!
//! Typically loaded from a JSON file by the application crate (feature
//! `serde`) and passed to [`PersonFactory::new`](crate::PersonFactory::new)
//! and [`City::synthesize_population`](crate::City::synthesize_population).
//! Every field has a default, so a config file only needs the fields it
//! changes.

use sp_core::TransportMode;

use crate::distribution::{DISTANCE_RANK_SCORES, HOURLY_DEPARTURE_WEIGHTS};

// ── Policies ──────────────────────────────────────────────────────────────────

/// How the next home district is picked from the districts that still have
/// unplaced inhabitants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HomeSelection {
    /// Uniformly at random (draws from the run RNG).
    #[default]
    Random,
    /// Always the first district in scan order; fills districts one by one.
    First,
}

/// What to do when a work shift ends after midnight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OvernightPolicy {
    /// Fold the shift into the day: the plan starts at work (ending the
    /// previous night's shift), goes home, and returns to work at the end.
    #[default]
    Wrap,
    /// Keep `home → work → home` and end the shift at 23:59:59.
    Clamp,
}

// ── TimingConfig ──────────────────────────────────────────────────────────────

/// Fixed components of a working day, in minutes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    pub travel_to_work_mins: u32,
    pub work_duration_mins:  u32,
    pub lunch_pause_mins:    u32,
}

impl TimingConfig {
    /// Minutes between leaving home and the nominal end of the work shift.
    pub fn shift_minutes(&self) -> u32 {
        self.travel_to_work_mins
            .saturating_add(self.work_duration_mins)
            .saturating_add(self.lunch_pause_mins)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            travel_to_work_mins: 30,
            work_duration_mins:  8 * 60,
            lunch_pause_mins:    30,
        }
    }
}

// ── SynthConfig ───────────────────────────────────────────────────────────────

/// Top-level synthesis configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynthConfig {
    /// Master RNG seed.  The same seed and inputs give the same population.
    pub seed: u64,

    pub home_selection: HomeSelection,

    pub overnight: OvernightPolicy,

    /// Work-district draws allowed per candidate district before falling
    /// back to the nearest district with a free workplace.
    pub retry_factor: u32,

    /// Mode of both commute legs.
    pub leg_mode: TransportMode,

    pub timing: TimingConfig,

    /// Weights of home-departure hours 0..=23.
    pub departure_weights: Vec<f64>,

    /// Weights of work-district distance ranks (0 = nearest, i.e. the home
    /// district itself).
    pub distance_weights: Vec<f64>,

    /// Boundary names that are not districts (e.g. an enclosing county
    /// border) and are skipped when the city is built.
    pub excluded_boundaries: Vec<String>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed:                42,
            home_selection:      HomeSelection::default(),
            overnight:           OvernightPolicy::default(),
            retry_factor:        16,
            leg_mode:            TransportMode::Car,
            timing:              TimingConfig::default(),
            departure_weights:   HOURLY_DEPARTURE_WEIGHTS.to_vec(),
            distance_weights:    DISTANCE_RANK_SCORES.to_vec(),
            excluded_boundaries: Vec::new(),
        }
    }
}
