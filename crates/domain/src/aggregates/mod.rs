//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Private fields + `#[inline]` accessors |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Value Object immutability | `#[derive(Clone, Copy)]` snapshots |
//! | Domain Events | Return enums from mutations |

pub mod player_state;

pub use player_state::{HiddenMetrics, PlayerSnapshot, PlayerState};
