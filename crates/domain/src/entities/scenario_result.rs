//! Scenario results - the append-only record of one resolved turn.

use serde::{Deserialize, Serialize};

use super::effect::OptionEffect;
use super::scenario::OptionId;
use crate::aggregates::PlayerSnapshot;
use crate::consistency::ConsistencyResult;

/// What the consistency scorer concluded about a choice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub consistency_delta: i64,
    pub scandal_penalty: i64,
    pub notes: Vec<String>,
}

impl From<ConsistencyResult> for Reflection {
    fn from(result: ConsistencyResult) -> Self {
        Self {
            consistency_delta: result.delta,
            scandal_penalty: result.scandal_penalty,
            notes: result.notes,
        }
    }
}

/// One resolved turn. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scenario_id: String,
    pub option_id: OptionId,
    /// The effect as applied (including any engine-added adjustments).
    pub effect: OptionEffect,
    pub snapshot_after: PlayerSnapshot,
    pub reflection: Reflection,
}
