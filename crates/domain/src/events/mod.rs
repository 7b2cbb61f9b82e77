//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified.

pub mod player_state_events;

pub use player_state_events::*;
