//! Tick scheduling.
//!
//! Gates how often the engine advances, independent of the caller's
//! polling rate. The caller invokes `try_advance` as often as it likes and
//! gets `true` at most once per interval.

use embassy_time::{Duration, Instant};

/// Default engine tick interval.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Fixed-interval gate with drift correction.
///
/// If the caller falls behind by more than two intervals, the deadline is
/// re-anchored to `now` instead of replaying the backlog as a burst.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    next_tick: Instant,
    interval: Duration,
}

impl TickScheduler {
    /// Create a scheduler with the default interval.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL)
    }

    /// Create a scheduler with a custom interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            next_tick: Instant::from_millis(0),
            interval,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns whether the engine may advance at `now`.
    ///
    /// Calls before the current deadline return `false` and change
    /// nothing; the first call at or past it moves the deadline one
    /// interval forward and returns `true`.
    pub fn try_advance(&mut self, now: Instant) -> bool {
        if now.as_millis() < self.next_tick.as_millis() {
            return false;
        }

        let max_drift_ms = self.interval.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }
        self.next_tick += self.interval;

        true
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
