//! Use cases - orchestration over the domain and entity modules.

pub mod simulation;

pub use simulation::{RunSetup, SimulationEngine, SimulationError};
