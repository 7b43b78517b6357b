//! `sp-plan` — synthesized persons and their one-day plans.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`activity`] | `ActivityKind`, `Activity`, `Leg`                         |
//! | [`plan`]     | `Plan` (activities alternating with legs)                 |
//! | [`person`]   | `Person`                                                  |
//! | [`sink`]     | `PopulationSink` trait, in-memory `Population`            |
//!
//! # Plan shape
//!
//! ```text
//! activity ─leg─ activity ─leg─ activity
//!  end=t0         end=t1         (no end)
//! ```
//!
//! End times are seconds since midnight and must be non-decreasing; the last
//! activity lasts until the end of the simulated day.

pub mod activity;
pub mod person;
pub mod plan;
pub mod sink;


pub use activity::{Activity, ActivityKind, Leg};
pub use person::Person;
pub use plan::Plan;
pub use sink::{Population, PopulationSink};
