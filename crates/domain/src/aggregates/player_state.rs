//! PlayerState aggregate - the single source of truth for one run
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated
//! - **Additive mutation only**: stats change through sparse deltas, never setters
//! - **Events from mutations**: scandal and turn changes return what happened
//! - **Copy-out reads**: [`PlayerSnapshot`] is an owned copy, so callers can
//!   never reach back into engine state through it

use serde::{Deserialize, Serialize};

use crate::common::floor_at_zero;
use crate::entities::DreamCard;
use crate::events::{ScandalShift, StageTransition, TurnEnded};
use crate::value_objects::{
    Attributes, HaggardLevel, LifeStatus, Mood, PersonalityVector, ScandalLevel,
    SparseAttributes, SparseLifeStatus, SparsePersonality, StageId, StageScaling,
};

/// Internal-only metrics, exposed read-only through snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenMetrics {
    pub personality: PersonalityVector,
    /// Always >= 0
    pub consistency_score: i64,
    /// Always >= 0
    pub scandal_value: i64,
}

/// Immutable copy of the player state at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub attributes: Attributes,
    pub life_status: LifeStatus,
    pub hidden: HiddenMetrics,
    pub stage: StageId,
    pub turns_remaining: u32,
    pub haggard: HaggardLevel,
    pub scandal: ScandalLevel,
}

impl PlayerSnapshot {
    pub fn mood(&self) -> Mood {
        Mood::from_levels(self.scandal, self.haggard)
    }
}

/// Mutable state of one run.
///
/// # Invariants
///
/// - Every attribute, life status and personality value is >= 0
/// - `consistency_score` and `scandal_value` are >= 0
/// - `turns_remaining` never increases and never drops below 0
/// - `scandal` never downgrades
#[derive(Debug, Clone)]
pub struct PlayerState {
    dream_card: DreamCard,
    attributes: Attributes,
    life_status: LifeStatus,
    hidden: HiddenMetrics,
    stage: StageId,
    stage_scaling: StageScaling,
    total_turns: u32,
    turns_remaining: u32,
    haggard: HaggardLevel,
    scandal: ScandalLevel,
}

impl PlayerState {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(dream_card: DreamCard, total_turns: u32) -> Self {
        Self {
            dream_card,
            attributes: Attributes::default(),
            life_status: LifeStatus::default(),
            hidden: HiddenMetrics::default(),
            stage: StageId::FIRST,
            stage_scaling: StageScaling::default(),
            total_turns,
            turns_remaining: total_turns,
            haggard: HaggardLevel::None,
            scandal: ScandalLevel::None,
        }
    }

    /// Choose how elapsed turns map onto stages for non-50-turn runs.
    pub fn with_stage_scaling(mut self, scaling: StageScaling) -> Self {
        self.stage_scaling = scaling;
        self
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn dream_card(&self) -> &DreamCard {
        &self.dream_card
    }

    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[inline]
    pub fn life_status(&self) -> &LifeStatus {
        &self.life_status
    }

    #[inline]
    pub fn hidden(&self) -> &HiddenMetrics {
        &self.hidden
    }

    #[inline]
    pub fn stage(&self) -> StageId {
        self.stage
    }

    #[inline]
    pub fn stage_scaling(&self) -> StageScaling {
        self.stage_scaling
    }

    #[inline]
    pub fn total_turns(&self) -> u32 {
        self.total_turns
    }

    #[inline]
    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    pub fn turns_elapsed(&self) -> u32 {
        self.total_turns.saturating_sub(self.turns_remaining)
    }

    #[inline]
    pub fn haggard(&self) -> HaggardLevel {
        self.haggard
    }

    #[inline]
    pub fn scandal(&self) -> ScandalLevel {
        self.scandal
    }

    /// True once every configured turn has been played.
    pub fn is_complete(&self) -> bool {
        self.turns_remaining == 0
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            attributes: self.attributes,
            life_status: self.life_status,
            hidden: self.hidden,
            stage: self.stage,
            turns_remaining: self.turns_remaining,
            haggard: self.haggard,
            scandal: self.scandal,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn apply_attribute_delta(&mut self, delta: &SparseAttributes) {
        self.attributes.apply(delta);
    }

    pub fn apply_life_status_delta(&mut self, delta: &SparseLifeStatus) {
        self.life_status.apply(delta);
    }

    pub fn apply_personality_delta(&mut self, delta: &SparsePersonality) {
        self.hidden.personality.apply(delta);
    }

    pub fn apply_consistency_delta(&mut self, delta: i64) {
        self.hidden.consistency_score = floor_at_zero(self.hidden.consistency_score, delta);
    }

    /// Change the scandal counter and escalate the tier if a threshold was crossed.
    pub fn apply_scandal_delta(&mut self, delta: i64) -> ScandalShift {
        self.hidden.scandal_value = floor_at_zero(self.hidden.scandal_value, delta);
        let previous = self.scandal;
        self.scandal = previous.after_scandal_change(self.hidden.scandal_value);
        ScandalShift::between(previous, self.scandal)
    }

    /// Close the current turn: count it down, then recompute stage, fatigue,
    /// and the integrity-driven scandal warning, in that order.
    pub fn end_turn(&mut self) -> TurnEnded {
        self.turns_remaining = self.turns_remaining.saturating_sub(1);

        let previous_stage = self.stage;
        self.stage = self
            .stage_scaling
            .stage_for(self.total_turns, self.turns_remaining);
        let stage = if self.stage == previous_stage {
            StageTransition::Unchanged { stage: self.stage }
        } else {
            StageTransition::Advanced {
                from: previous_stage,
                to: self.stage,
            }
        };

        self.haggard = HaggardLevel::evaluate(self.life_status.stress(), self.attributes.physical());

        let previous_scandal = self.scandal;
        self.scandal = previous_scandal.after_turn_end(self.life_status.integrity());

        TurnEnded {
            turns_remaining: self.turns_remaining,
            stage,
            haggard: self.haggard,
            scandal: ScandalShift::between(previous_scandal, self.scandal),
            run_complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{AttributeKey, LifeStatusKey, PersonalityTrait, DEFAULT_TOTAL_TURNS};

    fn state() -> PlayerState {
        let card = DreamCard::new("surgeon", "Top Surgeon", PersonalityTrait::Investigative);
        PlayerState::new(card, DEFAULT_TOTAL_TURNS)
    }

    #[test]
    fn new_state_starts_at_defaults() {
        let snapshot = state().snapshot();
        assert_eq!(snapshot.attributes, Attributes::default());
        assert_eq!(snapshot.life_status, LifeStatus::default());
        assert_eq!(snapshot.hidden.consistency_score, 0);
        assert_eq!(snapshot.hidden.scandal_value, 0);
        assert_eq!(snapshot.stage, StageId::FIRST);
        assert_eq!(snapshot.turns_remaining, 50);
        assert_eq!(snapshot.scandal, ScandalLevel::None);
        assert_eq!(snapshot.haggard, HaggardLevel::None);
    }

    #[test]
    fn deltas_floor_every_value_at_zero() {
        let mut state = state();
        state.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Luck, -999));
        state.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Stress, -999));
        state.apply_personality_delta(
            &SparsePersonality::new().with(PersonalityTrait::Conventional, -999),
        );
        state.apply_consistency_delta(-999);
        state.apply_scandal_delta(-999);

        assert_eq!(state.attributes().luck(), 0);
        assert_eq!(state.life_status().stress(), 0);
        assert_eq!(state.hidden().personality.conventional(), 0);
        assert_eq!(state.hidden().consistency_score, 0);
        assert_eq!(state.hidden().scandal_value, 0);
    }

    #[test]
    fn two_scandal_deltas_of_fifty_reach_max() {
        let mut state = state();
        let first = state.apply_scandal_delta(50);
        assert_eq!(
            first,
            ScandalShift::Escalated {
                from: ScandalLevel::None,
                to: ScandalLevel::Warning
            }
        );
        let second = state.apply_scandal_delta(50);
        assert_eq!(state.hidden().scandal_value, 100);
        assert_eq!(state.scandal(), ScandalLevel::Max);
        assert_eq!(second.level(), ScandalLevel::Max);
    }

    #[test]
    fn scandal_level_survives_counter_decrease() {
        let mut state = state();
        state.apply_scandal_delta(120);
        let shift = state.apply_scandal_delta(-100);
        assert_eq!(shift, ScandalShift::Unchanged { level: ScandalLevel::Max });
        assert_eq!(state.hidden().scandal_value, 20);
    }

    #[test]
    fn low_integrity_warns_on_next_turn_end() {
        let mut state = state();
        state.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Integrity, -35));
        // mutation alone does not change the tier
        assert_eq!(state.scandal(), ScandalLevel::None);
        let ended = state.end_turn();
        assert_eq!(state.scandal(), ScandalLevel::Warning);
        assert!(matches!(ended.scandal, ScandalShift::Escalated { .. }));
    }

    #[test]
    fn haggard_is_recomputed_each_turn() {
        let mut state = state();
        state.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Physical, 20));
        state.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Stress, 75));
        state.end_turn();
        assert_eq!(state.haggard(), HaggardLevel::Haggard);
        state.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Stress, -50));
        state.end_turn();
        assert_eq!(state.haggard(), HaggardLevel::None);
    }

    #[test]
    fn stage_is_non_decreasing_over_a_full_run() {
        let mut state = state();
        let mut stages = Vec::new();
        for _ in 0..60 {
            state.end_turn();
            stages.push(state.stage());
        }
        assert!(stages.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(stages[8], StageId::FIRST);
        assert_eq!(stages[9].value(), 2);
        assert_eq!(stages[39].value(), 5);
        assert_eq!(state.turns_remaining(), 0);
        assert!(state.is_complete());
    }

    #[test]
    fn end_turn_reports_stage_advance() {
        let mut state = state();
        for _ in 0..9 {
            state.end_turn();
        }
        let ended = state.end_turn();
        assert_eq!(
            ended.stage,
            StageTransition::Advanced {
                from: StageId::FIRST,
                to: StageId::new(2).unwrap()
            }
        );
        assert_eq!(ended.turns_remaining, 40);
        assert!(!ended.run_complete);
    }

    #[test]
    fn proportional_scaling_applies_to_short_runs() {
        let card = DreamCard::new("x", "x", PersonalityTrait::Artistic);
        let mut fixed = PlayerState::new(card.clone(), 20);
        let mut scaled = PlayerState::new(card, 20).with_stage_scaling(StageScaling::Proportional);
        fixed.end_turn();
        scaled.end_turn();
        assert_eq!(fixed.stage().value(), 4);
        assert_eq!(scaled.stage().value(), 1);
    }

    #[test]
    fn snapshot_is_an_independent_copy() {
        let mut state = state();
        let before = state.snapshot();
        let mut copy = before;
        copy.hidden.scandal_value = 999;
        assert_ne!(copy, state.snapshot());
        assert_eq!(state.snapshot(), before);

        state.apply_consistency_delta(5);
        assert_eq!(before.hidden.consistency_score, 0);
        assert_eq!(state.snapshot().hidden.consistency_score, 5);
    }

    #[test]
    fn mood_follows_levels() {
        let mut state = state();
        assert_eq!(state.snapshot().mood(), Mood::Normal);
        state.apply_scandal_delta(40);
        assert_eq!(state.snapshot().mood(), Mood::Scandal);
    }
}
