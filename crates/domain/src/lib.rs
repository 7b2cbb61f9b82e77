pub mod aggregates;
pub mod common;
pub mod consistency;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{HiddenMetrics, PlayerSnapshot, PlayerState};

pub use consistency::ConsistencyResult;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    CareerSuggestion, DreamCard, EffectTriggers, Ending, NarrativeTag, OptionEffect, OptionId,
    Profile, ProfileTrait, Reflection, Requirements, Scenario, ScenarioOption, ScenarioResult,
    UnmetRequirement, DESTINY_BONUS, MAX_OPTIONS, NEUTRAL_SCENARIO_ID,
};

pub use error::DomainError;

pub use events::{ScandalShift, StageTransition, TurnEnded};

pub use ids::RunId;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    AttributeKey, Attributes, HaggardLevel, LifeStatus, LifeStatusKey, Mood, PersonalityTrait,
    PersonalityVector, ScandalLevel, SparseAttributes, SparseLifeStatus, SparsePersonality,
    StageId, StageScaling, DEFAULT_TOTAL_TURNS,
};
