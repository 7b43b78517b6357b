//! A synthesized commuter.

use sp_core::PersonId;

use crate::Plan;

/// One synthesized person: who they are, where they live and work, and what
/// they do during the day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id:            PersonId,
    pub home_district: String,
    pub work_district: String,
    pub plan:          Plan,
}
