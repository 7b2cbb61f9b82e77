//! Infrastructure layer - configuration and the concrete time/random sources
//! behind the port traits.

pub mod clock;
pub mod config;
pub mod ports;
