//! Simulated time
//!
//! Wall-clock deltas are scaled by a fixed factor so that a short run can
//! exercise multi-hour billing: with the default factor of 3600 one real
//! second becomes sixty simulated minutes.

use crate::model::Timestamp;
use chrono::{Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Default multiplier applied to real minutes
pub const SIMULATION_FACTOR: f64 = 3600.0;

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Simulated minutes between two instants using [`SIMULATION_FACTOR`]
///
/// Never returns less than 1, including for zero or negative spans.
pub fn simulated_minutes_between(start: Timestamp, end: Timestamp) -> u64 {
    TimeScale::default().minutes_between(start, end)
}

/// Scaling from real elapsed time to simulated minutes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    factor: f64,
}

impl TimeScale {
    /// Creates a scale with the given multiplier
    pub fn new(factor: f64) -> Self {
        TimeScale { factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Rounded, scaled minutes between `start` and `end`, at least 1
    pub fn minutes_between(&self, start: Timestamp, end: Timestamp) -> u64 {
        let millis = (end - start).num_milliseconds() as f64;
        let actual_minutes = millis / MILLIS_PER_MINUTE;
        let simulated = (actual_minutes * self.factor).round();
        if simulated < 1.0 {
            1
        } else {
            simulated as u64
        }
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        TimeScale::new(SIMULATION_FACTOR)
    }
}

/// Source of "now" for entry and exit stamps
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Reads the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Clock that only moves when told to
///
/// Clones share the same instant, so a test can keep a handle after giving
/// the clock to a service and advance it between operations.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<Timestamp>>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        ManualClock {
            current: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, instant: Timestamp) {
        self.current.set(instant);
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.current.get()
    }
}
