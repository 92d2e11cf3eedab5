//! Adapters implementing domain ports.
//!
//! [`SystemClock`] drives real searches; [`SteppingClock`] replaces it in
//! tests that need cutoffs to fire at a reproducible point.

pub mod stepping_clock;
pub mod system_clock;

pub use stepping_clock::SteppingClock;
pub use system_clock::SystemClock;
