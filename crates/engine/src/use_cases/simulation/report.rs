//! End-of-run life report.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lifepath_domain::{
    CareerSuggestion, Ending, PersonalityVector, Profile, RunId, ScenarioResult, StageId,
};

use crate::content::career_suggestions;
use crate::entities::ScenarioCatalog;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeReport {
    pub run_id: RunId,
    pub ending: Ending,
    pub ending_score: i64,
    pub personality: PersonalityVector,
    /// Resolved scenarios per stage. Every stage is present.
    pub stage_summaries: BTreeMap<StageId, u32>,
    pub suggested_careers: Vec<CareerSuggestion>,
    pub turns_played: u32,
    pub generated_at: DateTime<Utc>,
}

/// Count resolved scenarios by the stage the catalog files them under.
/// Scenarios the catalog does not know (the neutral one) count as stage 1.
pub fn stage_summaries(
    history: &[ScenarioResult],
    catalog: &ScenarioCatalog,
) -> BTreeMap<StageId, u32> {
    let mut tally: BTreeMap<StageId, u32> = StageId::all().into_iter().map(|s| (s, 0)).collect();
    for entry in history {
        let stage = catalog
            .by_id(&entry.scenario_id)
            .map(|scenario| scenario.stage)
            .unwrap_or(StageId::FIRST);
        *tally.entry(stage).or_insert(0) += 1;
    }
    tally
}

/// Careers for the profile's dominant trait; empty without a scored profile.
pub fn suggested_careers(profile: Option<&Profile>) -> Vec<CareerSuggestion> {
    profile
        .and_then(Profile::dominant_trait)
        .map(career_suggestions)
        .unwrap_or_default()
}
