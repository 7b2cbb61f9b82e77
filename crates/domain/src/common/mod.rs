//! Common numeric helpers shared by the scoring and engine code.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O

pub mod math;

pub use math::{clamp_i64, floor_at_zero, round_half_up};
