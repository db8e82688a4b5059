use std::fmt;
use std::time::Duration;

use crate::constants::*;

/// Auto-play period in minutes, clamped to the supported range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Interval(f64);

impl Interval {
    pub fn new(minutes: f64) -> Self {
        Self(clamp_minutes(minutes))
    }

    pub fn minutes(self) -> f64 {
        self.0
    }

    pub fn period(self) -> Duration {
        Duration::from_secs_f64(self.0 * 60.0)
    }

    pub fn increased(self) -> Self {
        Self::new(self.0 + INTERVAL_STEP_MINUTES)
    }

    pub fn decreased(self) -> Self {
        Self::new(self.0 - INTERVAL_STEP_MINUTES)
    }

    pub fn is_min(self) -> bool {
        self.0 <= MIN_INTERVAL_MINUTES
    }

    pub fn is_max(self) -> bool {
        self.0 >= MAX_INTERVAL_MINUTES
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_MINUTES)
    }
}

/// "30 seconds", "1 minute", "1.5 minutes", "45 minutes".
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1.0 {
            write!(f, "{} seconds", (self.0 * 60.0).round())
        } else if self.0 == 1.0 {
            f.write_str("1 minute")
        } else {
            write!(f, "{} minutes", self.0)
        }
    }
}

pub fn clamp_minutes(minutes: f64) -> f64 {
    if minutes.is_nan() {
        return MIN_INTERVAL_MINUTES;
    }
    minutes.clamp(MIN_INTERVAL_MINUTES, MAX_INTERVAL_MINUTES)
}
