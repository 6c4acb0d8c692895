//! Sources for "what day is it today?".
//!
//! The [`Clock`] trait lets the command fall back to the current weekday when
//! no day is configured, while tests pin the answer with [`FixedClock`].
use time::OffsetDateTime;
use tracing::debug;

use crate::day::Day;

/// Supplies the current day name.
pub trait Clock {
    /// Returns today's day name.
    fn today(&self) -> Day;
}

/// Reads the weekday from the system clock.
///
/// The local offset is used when it can be determined; otherwise the weekday
/// is taken in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Day {
        let now = OffsetDateTime::now_local().unwrap_or_else(|err| {
            debug!(error = %err, "local offset unavailable; using UTC");
            OffsetDateTime::now_utc()
        });
        Day::from(now.weekday().to_string())
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock(pub Day);

impl Clock for FixedClock {
    fn today(&self) -> Day {
        self.0.clone()
    }
}
