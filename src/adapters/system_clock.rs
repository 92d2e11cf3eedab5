//! Wall-clock time source backed by [`Instant`].

use std::time::{Duration, Instant};

use crate::ports::Clock;

/// Clock measuring real elapsed time from a fixed origin.
///
/// The origin is normally captured at process start, so the hard deadline
/// accounts for argument parsing and board setup as well as the search.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose origin is now
    pub fn start() -> Self {
        Self::since(Instant::now())
    }

    /// Clock whose origin is an earlier instant
    pub fn since(origin: Instant) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}
