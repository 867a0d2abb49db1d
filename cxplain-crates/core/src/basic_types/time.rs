//! Time types used for the instrumentation of the explanation algorithms.

use std::fmt::Display;
use std::ops::AddAssign;
pub(crate) use std::time::Duration;
pub(crate) use std::time::Instant;

/// Wall-clock time accumulated over several measured intervals.
///
/// Displays as the number of seconds (as a float), which is the format used when logging
/// statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccumulatedTime(Duration);

impl AccumulatedTime {
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl AddAssign<Duration> for AccumulatedTime {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs;
    }
}

impl Display for AccumulatedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_secs_f64())
    }
}
