//! Departure times of a commuter's day.

use sp_core::{DayTime, SynthRng};

use crate::{EmpiricalDistribution, SynthError, SynthResult, TimingConfig};

/// Buckets of the home-departure distribution: one per hour of the day.
pub const HOURS_PER_DAY: usize = 24;

/// Upper bound of the minute offset added by [`randomize_within_hour`].
pub const MAX_JITTER_MINUTES: u32 = 59;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// When a commuter leaves home and when they leave work.
///
/// `work` may lie past midnight (`>= 86 400 s`); callers decide how to fold
/// it back into the day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Departures {
    pub home: DayTime,
    pub work: DayTime,
}

impl Departures {
    #[inline]
    pub fn crosses_midnight(&self) -> bool {
        self.work.crosses_midnight()
    }
}

/// Shift `t` by a uniform whole number of minutes in `0..=59`.
pub fn randomize_within_hour(t: DayTime, rng: &mut SynthRng) -> DayTime {
    t.plus_minutes(rng.gen_range(0..=MAX_JITTER_MINUTES))
}

/// Check that every shift fits into one day.
///
/// The work departure lies at most `shift_minutes + 59` minutes after the
/// home departure.  Folded back by one day it must not pass that home
/// departure, otherwise neither overnight policy yields a chronological plan.
pub fn validate_timing(timing: &TimingConfig) -> SynthResult<()> {
    let longest = timing.shift_minutes().saturating_add(MAX_JITTER_MINUTES);
    if longest > MINUTES_PER_DAY {
        return Err(SynthError::InvalidTiming(format!(
            "home to work departure may take {longest} minutes, more than one day"
        )));
    }
    Ok(())
}

/// Check that `hourly` only has buckets for hours of one day.
pub fn validate_departure_hours(hourly: &[f64]) -> SynthResult<()> {
    if hourly.len() > HOURS_PER_DAY {
        return Err(SynthError::InvalidDistribution(format!(
            "{} departure hours, at most {HOURS_PER_DAY} allowed",
            hourly.len()
        )));
    }
    Ok(())
}

/// Draw the home departure hour from `hourly`, then derive the work
/// departure from the configured shift length.  Both are jittered within
/// the hour.
pub fn sample_departures(
    hourly: &EmpiricalDistribution,
    timing: &TimingConfig,
    rng:    &mut SynthRng,
) -> Departures {
    let hour = hourly.sample(rng) as u32;
    let home = randomize_within_hour(DayTime::from_hms(hour, 0, 0), rng);
    let work = randomize_within_hour(home.plus_minutes(timing.shift_minutes()), rng);
    Departures { home, work }
}
