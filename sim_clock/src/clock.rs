//! Simulated clock anchored to a wall-clock epoch.

use crate::time::{Duration, Instant};
use chrono::{DateTime, Local, SecondsFormat, TimeDelta, Utc};

/// Simulated clock with controllable time progression
///
/// The clock only advances when told to. Wall-clock timestamps are derived
/// from the epoch plus elapsed simulated time, so two clocks with the same
/// epoch and the same sequence of advances produce identical timestamps.
///
/// # Examples
///
/// ```
/// use sim_clock::{Duration, SimClock};
///
/// let mut clock = SimClock::at_unix_epoch();
/// clock.advance(Duration::from_millis(500));
/// assert_eq!(clock.iso_timestamp(), "1970-01-01T00:00:00.500Z");
/// ```
#[derive(Debug, Clone)]
pub struct SimClock {
    epoch: DateTime<Utc>,
    now: Instant,
}

impl SimClock {
    /// Creates a clock whose epoch is the given wall-clock time
    pub fn new(epoch: DateTime<Utc>) -> Self {
        Self {
            epoch,
            now: Instant::ZERO,
        }
    }

    /// Creates a clock anchored to the current wall-clock time
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    /// Creates a clock anchored to the Unix epoch
    ///
    /// Useful for tests that compare timestamps.
    pub fn at_unix_epoch() -> Self {
        Self::new(DateTime::<Utc>::default())
    }

    /// Returns the current simulated instant
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Returns the wall-clock epoch
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Advances the clock by the given duration
    pub fn advance(&mut self, delta: Duration) {
        self.now = self.now + delta;
    }

    /// Moves the clock forward to `target`
    ///
    /// Targets in the past are ignored; the clock is monotonic.
    pub fn advance_to(&mut self, target: Instant) {
        if target > self.now {
            self.now = target;
        }
    }

    /// Wall-clock time corresponding to the current instant
    pub fn wall_time(&self) -> DateTime<Utc> {
        let nanos = i64::try_from(self.now.as_nanos()).unwrap_or(i64::MAX);
        self.epoch
            .checked_add_signed(TimeDelta::nanoseconds(nanos))
            .unwrap_or(self.epoch)
    }

    /// ISO-8601 UTC timestamp with millisecond precision
    pub fn iso_timestamp(&self) -> String {
        self.wall_time().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Time of day in the local timezone, e.g. `3:04:05 PM`
    pub fn local_time_string(&self) -> String {
        self.wall_time()
            .with_timezone(&Local)
            .format("%-I:%M:%S %p")
            .to_string()
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::starting_now()
    }
}
