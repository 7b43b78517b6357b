//! Day-time model.
//!
//! Activity end times are whole seconds since midnight of the simulated day.
//! A `DayTime` may exceed 24 h while a schedule is being computed (a work
//! shift that ends after midnight); [`DayTime::crosses_midnight`] and
//! [`DayTime::previous_day`] let plan construction fold it back into one day.

use std::fmt;

pub const SECS_PER_MINUTE: u32 = 60;
pub const SECS_PER_HOUR:   u32 = 3_600;
pub const SECS_PER_DAY:    u32 = 86_400;

/// Seconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayTime(pub u32);

impl DayTime {
    /// Last representable second of the day, 23:59:59.
    pub const END_OF_DAY: DayTime = DayTime(SECS_PER_DAY - 1);

    #[inline]
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        DayTime(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds)
    }

    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    /// Return the time `minutes` later.
    #[inline]
    pub fn plus_minutes(self, minutes: u32) -> DayTime {
        DayTime(self.0 + minutes * SECS_PER_MINUTE)
    }

    /// `true` once the time has run past the end of the day.
    #[inline]
    pub fn crosses_midnight(self) -> bool {
        self.0 >= SECS_PER_DAY
    }

    /// The same wall-clock time one day earlier.  Saturates at midnight.
    #[inline]
    pub fn previous_day(self) -> DayTime {
        DayTime(self.0.saturating_sub(SECS_PER_DAY))
    }

    /// Clamp into `[00:00:00, 23:59:59]`.
    #[inline]
    pub fn clamp_to_day(self) -> DayTime {
        self.min(Self::END_OF_DAY)
    }

}

impl fmt::Display for DayTime {
    /// `HH:MM:SS`, the format transport simulators expect for end times.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.0 / SECS_PER_HOUR;
        let m = (self.0 % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let s = self.0 % SECS_PER_MINUTE;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}
