//! Plan elements: activities and the legs between them.

use sp_core::{DayTime, NodeId, Point, TransportMode};

// ── ActivityKind ──────────────────────────────────────────────────────────────

/// What a person does at an activity location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActivityKind {
    Home,
    Work,
}

impl ActivityKind {
    /// Activity type label used in population files.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Home => "home",
            ActivityKind::Work => "work",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

/// One stay at a network node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub kind:     ActivityKind,
    /// Node the activity takes place at.
    pub node:     NodeId,
    /// Position of `node`, copied so serializers need no network access.
    pub location: Point,
    /// Departure time.  `None` for the final activity of the day.
    pub end_time: Option<DayTime>,
}

impl Activity {
    pub fn new(kind: ActivityKind, node: NodeId, location: Point) -> Self {
        Self { kind, node, location, end_time: None }
    }

    /// Builder-style setter for the departure time.
    pub fn ending_at(mut self, end_time: DayTime) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

// ── Leg ───────────────────────────────────────────────────────────────────────

/// Travel between two consecutive activities.  Routing is left to the
/// transport simulator; only the mode is fixed here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub mode: TransportMode,
}

impl Leg {
    pub fn new(mode: TransportMode) -> Self {
        Self { mode }
    }
}
