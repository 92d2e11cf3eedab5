//! Clock port - abstraction over the search's time source
//!
//! The search only ever asks "how long since the start?", so a clock is a
//! monotonic reading relative to a fixed origin. Production code measures
//! wall time; tests substitute a clock that advances by a fixed step on every
//! reading, which makes cutoff behaviour reproducible.

use std::time::Duration;

/// Monotonic time source measured from a fixed origin.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use linemark::{adapters::SteppingClock, ports::Clock};
///
/// let clock = SteppingClock::new(Duration::from_millis(2));
/// assert_eq!(clock.elapsed(), Duration::ZERO);
/// assert_eq!(clock.elapsed(), Duration::from_millis(2));
/// ```
pub trait Clock {
    /// Time elapsed since the clock's origin.
    ///
    /// Successive readings never decrease.
    fn elapsed(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}
