//! Consistency scoring - how well one choice fits the player's dream card.
//!
//! Pure and deterministic: the same `(dream card, effect)` pair always gives
//! the same result and neither input is touched.
//!
//! ```text
//! score  = 4 * personality[primary] + 2 * personality[secondary]
//!        + integrity delta
//!        + 20 if the effect is legendary
//! score *= consistency weight (when present and non-zero)
//! delta  = clamp(round(score - scandal penalty), -30, 30)
//! ```

use serde::{Deserialize, Serialize};

use crate::common::{clamp_i64, round_half_up};
use crate::entities::{DreamCard, OptionEffect};

const PRIMARY_WEIGHT: f64 = 4.0;
const SECONDARY_WEIGHT: f64 = 2.0;
const INTEGRITY_WEIGHT: f64 = 1.0;
const LEGEND_BONUS: f64 = 20.0;

/// Penalty subtracted from the score when a choice triggers a scandal.
pub const SCANDAL_TRIGGER_PENALTY: i64 = 15;
/// Bound on a single choice's consistency delta, in both directions.
pub const MAX_CONSISTENCY_DELTA: i64 = 30;

pub const SCANDAL_NOTE: &str = "Scandal warning triggered";
pub const LEGEND_NOTE: &str = "Legendary action aligned with dream card";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyResult {
    /// Always within `[-30, 30]`
    pub delta: i64,
    pub scandal_penalty: i64,
    pub notes: Vec<String>,
}

/// Score one chosen effect against the dream card.
pub fn score(dream_card: &DreamCard, effect: &OptionEffect) -> ConsistencyResult {
    let mut notes = Vec::new();
    let mut scandal_penalty = 0;

    let primary = effect.personality.get(dream_card.primary_trait).unwrap_or(0);
    let mut score = primary as f64 * PRIMARY_WEIGHT;
    if let Some(secondary) = dream_card.secondary_trait {
        score += effect.personality.get(secondary).unwrap_or(0) as f64 * SECONDARY_WEIGHT;
    }

    if let Some(integrity) = effect.life_status.integrity {
        score += integrity as f64 * INTEGRITY_WEIGHT;
    }

    if effect.triggers.scandal {
        scandal_penalty += SCANDAL_TRIGGER_PENALTY;
        notes.push(SCANDAL_NOTE.to_string());
    }

    if effect.triggers.legend {
        score += LEGEND_BONUS;
        notes.push(LEGEND_NOTE.to_string());
    }

    // A zero weight counts as "no weight" here, unlike in the ending score.
    if let Some(weight) = effect.consistency_weight.filter(|w| *w != 0.0) {
        score *= weight;
    }

    let delta = clamp_i64(
        round_half_up(score - scandal_penalty as f64),
        -MAX_CONSISTENCY_DELTA,
        MAX_CONSISTENCY_DELTA,
    );

    ConsistencyResult {
        delta,
        scandal_penalty,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{LifeStatusKey, PersonalityTrait};

    fn investigator() -> DreamCard {
        DreamCard::new("surgeon", "Top Surgeon", PersonalityTrait::Investigative)
            .with_secondary(PersonalityTrait::Social)
    }

    #[test]
    fn primary_trait_counts_four_times() {
        let card = DreamCard::new("x", "x", PersonalityTrait::Investigative);
        let effect = OptionEffect::new()
            .with_personality(PersonalityTrait::Investigative, 5)
            .with_life_status(LifeStatusKey::Happiness, 5);
        let result = score(&card, &effect);
        assert_eq!(result.delta, 20);
        assert_eq!(result.scandal_penalty, 0);
        assert!(result.notes.is_empty());
    }

    #[test]
    fn secondary_trait_counts_twice_and_integrity_once() {
        let effect = OptionEffect::new()
            .with_personality(PersonalityTrait::Investigative, 1)
            .with_personality(PersonalityTrait::Social, 2)
            .with_life_status(LifeStatusKey::Integrity, 3);
        // 4 + 4 + 3
        assert_eq!(score(&investigator(), &effect).delta, 11);
    }

    #[test]
    fn unrelated_traits_score_nothing() {
        let effect = OptionEffect::new().with_personality(PersonalityTrait::Enterprising, 9);
        assert_eq!(score(&investigator(), &effect).delta, 0);
    }

    #[test]
    fn delta_is_clamped() {
        let effect = OptionEffect::new().with_personality(PersonalityTrait::Investigative, 50);
        assert_eq!(score(&investigator(), &effect).delta, 30);
        let effect = OptionEffect::new().with_personality(PersonalityTrait::Investigative, -50);
        assert_eq!(score(&investigator(), &effect).delta, -30);
    }

    #[test]
    fn scandal_trigger_penalises_and_notes() {
        let effect = OptionEffect::new().triggering_scandal();
        let result = score(&investigator(), &effect);
        assert_eq!(result.delta, -15);
        assert_eq!(result.scandal_penalty, 15);
        assert_eq!(result.notes, vec![SCANDAL_NOTE.to_string()]);
    }

    #[test]
    fn legend_adds_bonus_before_weight() {
        let effect = OptionEffect::new()
            .triggering_legend()
            .with_consistency_weight(0.5);
        let result = score(&investigator(), &effect);
        assert_eq!(result.delta, 10);
        assert_eq!(result.notes, vec![LEGEND_NOTE.to_string()]);
    }

    #[test]
    fn weight_does_not_scale_scandal_penalty() {
        let effect = OptionEffect::new()
            .with_personality(PersonalityTrait::Investigative, 2)
            .triggering_scandal()
            .with_consistency_weight(2.0);
        // 8 * 2 - 15
        assert_eq!(score(&investigator(), &effect).delta, 1);
    }

    #[test]
    fn zero_weight_is_ignored() {
        let effect = OptionEffect::new()
            .with_personality(PersonalityTrait::Investigative, 2)
            .with_consistency_weight(0.0);
        assert_eq!(score(&investigator(), &effect).delta, 8);
    }

    #[test]
    fn halves_round_up() {
        let effect = OptionEffect::new()
            .with_personality(PersonalityTrait::Investigative, 1)
            .with_consistency_weight(0.625);
        // 4 * 0.625 = 2.5
        assert_eq!(score(&investigator(), &effect).delta, 3);
        let effect = OptionEffect::new()
            .with_personality(PersonalityTrait::Investigative, -1)
            .with_consistency_weight(0.625);
        assert_eq!(score(&investigator(), &effect).delta, -2);
    }

    #[test]
    fn scoring_is_deterministic_and_pure() {
        let card = investigator();
        let effect = OptionEffect::new()
            .with_personality(PersonalityTrait::Social, 3)
            .triggering_legend();
        let before = effect.clone();
        assert_eq!(score(&card, &effect), score(&card, &effect));
        assert_eq!(effect, before);
    }
}
