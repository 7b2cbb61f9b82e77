//! Entities - content and records the engine consumes or produces

mod dream_card;
mod effect;
mod ending;
mod profile;
mod scenario;
mod scenario_result;

pub use dream_card::{DreamCard, DESTINY_BONUS};
pub use effect::{EffectTriggers, NarrativeTag, OptionEffect};
pub use ending::Ending;
pub use profile::{CareerSuggestion, Profile, ProfileTrait};
pub use scenario::{
    OptionId, Requirements, Scenario, ScenarioOption, UnmetRequirement, MAX_OPTIONS,
    NEUTRAL_SCENARIO_ID,
};
pub use scenario_result::{Reflection, ScenarioResult};
