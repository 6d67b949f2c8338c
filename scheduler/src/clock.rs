//! Time sources used to timestamp execution slices.
//!
//! Time never influences which process runs next, it only labels the log.

use std::thread;
use std::time::{Duration, Instant};

/// The default length of one time unit.
pub const TIME_UNIT: Duration = Duration::from_millis(1);

/// A source of timestamps that can also block for a number of time units.
pub trait Clock {
    /// The current time in nanoseconds.
    fn now(&self) -> u64;

    /// Occupy the clock for `units` time units.
    fn block(&mut self, units: u64);
}

/// A clock that only moves when blocked, and does so instantly.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    now: u64,
    unit: Duration,
}

impl SimulatedClock {
    pub fn new(unit: Duration) -> Self {
        SimulatedClock { now: 0, unit }
    }
}

impl Default for SimulatedClock {
    fn default() -> Self {
        SimulatedClock::new(TIME_UNIT)
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> u64 {
        self.now
    }

    fn block(&mut self, units: u64) {
        let nanos = self.unit.as_nanos() as u64;
        self.now = self.now.saturating_add(units.saturating_mul(nanos));
    }
}

/// A monotonic clock that sleeps the current thread when blocked.
///
/// Timestamps are relative to the moment the clock was created.
#[derive(Debug, Clone)]
pub struct WallClock {
    origin: Instant,
    unit: Duration,
}

impl WallClock {
    pub fn new(unit: Duration) -> Self {
        WallClock {
            origin: Instant::now(),
            unit,
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        WallClock::new(TIME_UNIT)
    }
}

impl Clock for WallClock {
    fn now(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }

    fn block(&mut self, units: u64) {
        if units > 0 {
            let units = u32::try_from(units).unwrap_or(u32::MAX);
            thread::sleep(self.unit.saturating_mul(units));
        }
    }
}
