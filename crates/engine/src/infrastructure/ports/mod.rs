//! Port traits for infrastructure boundaries.
//!
//! The engine has no repositories or external services; the only seams are
//! time and randomness.

mod testing;

pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
