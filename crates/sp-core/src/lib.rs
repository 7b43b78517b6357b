//! `sp-core` — foundational types for the `rust_synthpop` workspace.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `PersonId`                                  |
//! | [`geo`]         | `Point`, `BBox`, `Boundary` (point-in-polygon)        |
//! | [`time`]        | `DayTime` (seconds since midnight)                    |
//! | [`rng`]         | `SynthRng` (seedable run-level RNG)                   |
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{BBox, Boundary, Point};
pub use ids::{NodeId, PersonId};
pub use rng::SynthRng;
pub use time::DayTime;
pub use transport::TransportMode;
