//! `sp-synth` — district partitioning and commuter synthesis.
//!
//! # Pipeline
//!
//! ```text
//! boundaries + census ──CityBuilder──▶ City
//! NodeNetwork ──City::assign_nodes──▶ nodes partitioned by district
//! City::synthesize_population:
//!   while some district has unplaced inhabitants:
//!     ① Home     — pick a home district (random or first in scan order)
//!     ② Work     — rank districts by center distance, draw a rank from the
//!                  distance-rank distribution, redraw while full
//!     ③ Timing   — draw the home departure hour, derive the work departure
//!     ④ Plan     — home → work → home (or the overnight variant)
//!     ⑤ Record   — bump counters, hand the person to the PopulationSink
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` for `SynthConfig` and friends |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_core::SynthRng;
//! use sp_plan::Population;
//! use sp_synth::{CityBuilder, PersonFactory, SynthConfig};
//!
//! let config = SynthConfig::default();
//! let mut city = CityBuilder::new(&census)
//!     .boundaries(boundaries)
//!     .network(&network)
//!     .build()?;
//! let factory = PersonFactory::new(&config)?;
//! let mut rng = SynthRng::new(config.seed);
//! let mut population = Population::new();
//! city.synthesize_population(&factory, config.home_selection, &mut rng, &mut population)?;
//! ```

pub mod builder;
pub mod city;
pub mod config;
pub mod distribution;
pub mod district;
pub mod error;
pub mod person;
pub mod select;
pub mod timing;

#[cfg(test)]
mod tests;

pub use builder::CityBuilder;
pub use city::City;
pub use config::{HomeSelection, OvernightPolicy, SynthConfig, TimingConfig};
pub use distribution::{DISTANCE_RANK_SCORES, EmpiricalDistribution, HOURLY_DEPARTURE_WEIGHTS};
pub use district::District;
pub use error::{SynthError, SynthResult};
pub use person::PersonFactory;
pub use select::{rank_by_distance, select_work_district};
pub use timing::{
    Departures, HOURS_PER_DAY, MAX_JITTER_MINUTES, sample_departures, validate_departure_hours,
    validate_timing,
};
