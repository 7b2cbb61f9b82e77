//! Lifepath Engine library.
//!
//! Runs one turn-based life simulation from the first scenario to the ending.
//!
//! ## Structure
//!
//! - `entities/` - Scenario catalog and next-scenario selection
//! - `use_cases/` - The simulation run: turn resolution, endings, report
//! - `infrastructure/` - Ports, clock/random implementations, configuration
//! - `content/` - Built-in scenarios, dream cards and career suggestions

pub mod content;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

pub use use_cases::simulation::{LifeReport, RunSetup, SimulationEngine, SimulationError};
