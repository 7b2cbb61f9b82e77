//! Value objects - Immutable objects defined by their attributes

mod keys;
mod levels;
mod stage;
mod stats;

pub use keys::{AttributeKey, LifeStatusKey, PersonalityTrait};
pub use levels::{
    HaggardLevel, Mood, ScandalLevel, HAGGARD_PHYSICAL_THRESHOLD, HAGGARD_STRESS_THRESHOLD,
    INTEGRITY_WARNING_FLOOR, SCANDAL_MAX_THRESHOLD, SCANDAL_WARNING_THRESHOLD,
};
pub use stage::{StageId, StageScaling, DEFAULT_TOTAL_TURNS};
pub use stats::{
    Attributes, LifeStatus, PersonalityVector, SparseAttributes, SparseLifeStatus,
    SparsePersonality,
};
