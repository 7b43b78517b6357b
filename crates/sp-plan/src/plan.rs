//! `Plan`: activities joined by legs.

use crate::{Activity, Leg};

/// A one-day plan: `activities.len() == legs.len() + 1`, with leg `i`
/// connecting activity `i` to activity `i + 1`.
///
/// The alternation is enforced by construction: a plan starts with one
/// activity and grows one `(leg, activity)` trip at a time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    activities: Vec<Activity>,
    legs:       Vec<Leg>,
}

impl Plan {
    /// A plan consisting of `first` only.
    pub fn starting_with(first: Activity) -> Self {
        Self { activities: vec![first], legs: Vec::new() }
    }

    /// Append a trip: travel by `leg`, then perform `next`.
    pub fn add_trip(&mut self, leg: Leg, next: Activity) {
        self.legs.push(leg);
        self.activities.push(next);
    }

    /// Builder-style [`add_trip`](Self::add_trip).
    pub fn then(mut self, leg: Leg, next: Activity) -> Self {
        self.add_trip(leg, next);
        self
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// The leg departing from activity `index`, if any.
    pub fn leg_after(&self, index: usize) -> Option<&Leg> {
        self.legs.get(index)
    }

    /// `true` if every activity except the last has an end time, the last
    /// has none, and end times never decrease.
    pub fn is_chronological(&self) -> bool {
        let Some((last, rest)) = self.activities.split_last() else {
            return false;
        };
        if last.end_time.is_some() {
            return false;
        }
        let mut previous = None;
        for activity in rest {
            let Some(end) = activity.end_time else {
                return false;
            };
            if previous.is_some_and(|p| end < p) {
                return false;
            }
            previous = Some(end);
        }
        true
    }
}
