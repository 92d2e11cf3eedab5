//! Time governor for the two search cutoffs.
//!
//! The soft budget is consumed call by call: every recursive entry subtracts
//! the time spent since the previous entry. Once it is gone the search stops
//! expanding and rolls up heuristic scores. The hard deadline is measured from
//! the clock's origin and, once passed, aborts the search outright.

use std::time::Duration;

use super::config::{SearchConfig, TimeBudget};
use crate::ports::Clock;

fn as_millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Tracks elapsed search time against the soft and hard budgets.
#[derive(Debug)]
pub struct TimeGovernor<C> {
    clock: C,
    remaining_soft_ms: f64,
    hard_deadline_ms: f64,
    last_reading: Option<Duration>,
}

impl<C: Clock> TimeGovernor<C> {
    pub fn new(clock: C, budget: TimeBudget, config: &SearchConfig) -> Self {
        Self {
            clock,
            remaining_soft_ms: budget.as_millis() * config.soft_fraction,
            hard_deadline_ms: budget.as_millis() - config.hard_margin_ms,
            last_reading: None,
        }
    }

    /// Read the clock on entry to a search call.
    ///
    /// The first tick only records the reading; later ticks charge the time
    /// since the previous tick against the soft budget.
    pub fn tick(&mut self) {
        let now = self.clock.elapsed();
        if let Some(last) = self.last_reading {
            self.remaining_soft_ms -= as_millis(now.saturating_sub(last));
        }
        self.last_reading = Some(now);
    }

    /// True once the soft budget is exhausted
    pub fn should_stop_expanding(&self) -> bool {
        self.remaining_soft_ms <= 0.0
    }

    /// True once the latest reading is at or past the hard deadline
    pub fn has_hard_deadline_passed(&self) -> bool {
        self.elapsed_ms() >= self.hard_deadline_ms
    }

    /// Milliseconds since the clock's origin, as of the latest tick
    pub fn elapsed_ms(&self) -> f64 {
        self.last_reading.map(as_millis).unwrap_or(0.0)
    }

    pub fn remaining_soft_ms(&self) -> f64 {
        self.remaining_soft_ms
    }

    pub fn hard_deadline_ms(&self) -> f64 {
        self.hard_deadline_ms
    }
}
