//! Ports (trait boundaries) for external dependencies.
//!
//! These traits are owned by the domain and implemented by adapters, so the
//! search engine never depends on a concrete infrastructure type.

pub mod clock;

pub use clock::Clock;
