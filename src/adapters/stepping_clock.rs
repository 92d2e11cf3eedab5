//! Deterministic clock for testing.
//!
//! Every reading returns the current time and then advances it by a fixed
//! step. Since the search reads the clock exactly once per node, a stepping
//! clock turns the time budget into a node budget and makes soft and hard
//! cutoffs fire at the same point on every run.

use std::{cell::Cell, time::Duration};

use crate::ports::Clock;

/// Clock advancing by `step` on every reading.
///
/// A zero step gives a frozen clock under which no cutoff ever fires.
#[derive(Debug, Clone)]
pub struct SteppingClock {
    now: Cell<Duration>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
        }
    }

    /// Clock that never advances
    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Number of readings taken so far (zero for a frozen clock)
    pub fn readings(&self) -> u128 {
        if self.step.is_zero() {
            0
        } else {
            self.now.get().as_nanos() / self.step.as_nanos()
        }
    }
}

impl Clock for SteppingClock {
    fn elapsed(&self) -> Duration {
        let reading = self.now.get();
        self.now.set(reading + self.step);
        reading
    }
}
