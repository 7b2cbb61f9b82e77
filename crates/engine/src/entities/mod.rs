//! Entity modules - content owned by a run.

pub mod scenario_catalog;

pub use scenario_catalog::{CatalogError, ScenarioCatalog};
