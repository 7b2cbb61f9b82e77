//! Ending rules - an ordered decision table over the final state and history.
//!
//! Rules are checked top to bottom and the first match wins, so two true
//! conditions always resolve to the earlier rule. Some rules can never fire
//! because an earlier rule covers them (`gambler` and `awakening` sit below
//! `reversal`); they stay in the table to keep the catalog complete.

use lifepath_domain::{Ending, NarrativeTag, PlayerSnapshot, ScenarioResult};

/// Consistency weight at or above which a choice counts as a "stable" one.
const STABLE_WEIGHT: f64 = 1.2;
/// Maximum attribute spread for a balanced profile.
const BALANCED_SPREAD: i64 = 15;

/// What the rules can look at: the final snapshot plus the full history.
#[derive(Debug, Clone, Copy)]
pub struct EndingContext<'a> {
    pub snapshot: &'a PlayerSnapshot,
    pub history: &'a [ScenarioResult],
}

impl<'a> EndingContext<'a> {
    pub fn new(snapshot: &'a PlayerSnapshot, history: &'a [ScenarioResult]) -> Self {
        Self { snapshot, history }
    }

    fn any_legend(&self) -> bool {
        self.history.iter().any(|entry| entry.effect.triggers.legend)
    }

    fn any_tag(&self, tag: NarrativeTag) -> bool {
        self.history.iter().any(|entry| entry.effect.has_tag(tag))
    }

    /// At least 40% of choices (rounded down) carried a high consistency
    /// weight. Holds trivially for an empty history.
    fn mostly_stable(&self) -> bool {
        let stable = self
            .history
            .iter()
            .filter(|entry| {
                entry
                    .effect
                    .consistency_weight
                    .is_some_and(|weight| weight != 0.0 && weight >= STABLE_WEIGHT)
            })
            .count();
        stable >= self.history.len() * 2 / 5
    }

    fn balanced(&self) -> bool {
        self.snapshot.attributes.spread() <= BALANCED_SPREAD
    }
}

/// One row of the table.
pub struct EndingRule {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    matches: fn(&EndingContext<'_>) -> bool,
}

impl EndingRule {
    pub fn matches(&self, ctx: &EndingContext<'_>) -> bool {
        (self.matches)(ctx)
    }

    pub fn to_ending(&self) -> Ending {
        Ending::new(self.id, self.title, self.description)
    }
}

impl std::fmt::Debug for EndingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndingRule").field("id", &self.id).finish()
    }
}

pub static ENDING_RULES: [EndingRule; 20] = [
    EndingRule {
        id: "ending-legendary-research",
        title: "Founder of a Legendary Research Center",
        description: "Your breakthrough research grew into a legendary research center.",
        matches: |c| c.snapshot.attributes.intellect() > 90 && c.any_legend(),
    },
    EndingRule {
        id: "ending-tired-billionaire",
        title: "Tired Billionaire",
        description: "Rich beyond measure, and exhausted.",
        matches: |c| {
            c.snapshot.life_status.money() > 1_000_000 && c.snapshot.life_status.happiness() < 30
        },
    },
    EndingRule {
        id: "ending-free-artist",
        title: "Free-Spirited Artist",
        description: "You became known for your art and your freedom.",
        matches: |c| {
            c.snapshot.attributes.inspiration() > 85 && c.snapshot.life_status.happiness() > 80
        },
    },
    EndingRule {
        id: "ending-scandal",
        title: "Disgraced Shortcut Taker",
        description: "Scandal ended up defining your story.",
        matches: |c| c.snapshot.hidden.scandal_value >= 100,
    },
    EndingRule {
        id: "ending-reversal",
        title: "Comeback Winner",
        description: "One spin on Reversal Island changed your life.",
        matches: |c| c.any_tag(NarrativeTag::ReversalRoulette),
    },
    EndingRule {
        id: "ending-mentor",
        title: "Outstanding Public Mentor",
        description: "Your life inspired others.",
        matches: |c| c.snapshot.hidden.personality.social() > 85,
    },
    EndingRule {
        id: "ending-order-guardian",
        title: "Rigorous Guardian of Order",
        description: "You laid the foundations of order.",
        matches: |c| c.snapshot.hidden.personality.conventional() > 90,
    },
    EndingRule {
        id: "ending-data-hermit",
        title: "Hermit of the Data Age",
        description: "Your algorithms quietly hold society up.",
        matches: |c| {
            let p = &c.snapshot.hidden.personality;
            p.investigative() > 85 && p.social() < 30
        },
    },
    EndingRule {
        id: "ending-forgotten-gear",
        title: "Forgotten Technical Cog",
        description: "You gave everything quietly and were replaced.",
        matches: |c| {
            c.snapshot.attributes.physical() > 80 && c.snapshot.hidden.personality.enterprising() < 30
        },
    },
    EndingRule {
        id: "ending-content-tourist",
        title: "Passing Guest of a Content Empire",
        description: "Briefly famous, then gone.",
        matches: |c| {
            c.snapshot.attributes.inspiration() > 80 && c.snapshot.life_status.stress() > 70
        },
    },
    EndingRule {
        id: "ending-athlete",
        title: "Passionate Sports Star",
        description: "You burned your youth bright and won glory.",
        matches: |c| c.snapshot.attributes.physical() > 90 && c.snapshot.life_status.stress() > 60,
    },
    EndingRule {
        id: "ending-cross-innovator",
        title: "Cross-Disciplinary Innovation Leader",
        description: "You joined technology and art to open new ground.",
        matches: |c| {
            c.snapshot.attributes.intellect() > 80 && c.snapshot.attributes.inspiration() > 80
        },
    },
    EndingRule {
        id: "ending-power-broker",
        title: "Behind-the-Scenes Power Broker",
        description: "You control the resources and keep a low profile.",
        matches: |c| {
            let p = &c.snapshot.hidden.personality;
            p.enterprising() > 85 && p.social() < 40
        },
    },
    EndingRule {
        id: "ending-minimalist",
        title: "Contented Minimalist",
        description: "You found freedom in having little.",
        matches: |c| c.snapshot.life_status.money() < 200 && c.snapshot.life_status.happiness() > 95,
    },
    EndingRule {
        id: "ending-gambler",
        title: "Disappointed Gambler",
        description: "You waited for a miracle that never came.",
        matches: |c| c.any_tag(NarrativeTag::ReversalRoulette) && c.snapshot.hidden.scandal_value > 0,
    },
    EndingRule {
        id: "ending-heir",
        title: "Guardian of the Family Legacy",
        description: "A steady life spent keeping what you were given.",
        matches: |c| c.mostly_stable(),
    },
    EndingRule {
        id: "ending-explorer",
        title: "Globe-Trotting Explorer",
        description: "Your journeys inspired those who came after.",
        matches: |c| c.any_tag(NarrativeTag::Travel),
    },
    EndingRule {
        id: "ending-ghost",
        title: "Ghost in the System",
        description: "You drifted away calmly, perfectly balanced.",
        matches: |c| c.balanced(),
    },
    EndingRule {
        id: "ending-martyr",
        title: "Martyr of a Tech Startup",
        description: "You fell on the eve of success.",
        matches: |c| {
            c.snapshot.hidden.personality.enterprising() > 70
                && c.snapshot.attributes.intellect() > 70
                && c.snapshot.life_status.stress() > 80
        },
    },
    EndingRule {
        id: "ending-awakening",
        title: "Awakened for a Second Life",
        description: "You unlocked a second playthrough of fate.",
        matches: |c| c.any_tag(NarrativeTag::ReversalRoulette),
    },
];

/// Matches when no other rule does.
pub static FALLBACK_ENDING: EndingRule = EndingRule {
    id: "ending-default",
    title: "Traveler on Life's Journey",
    description: "Your journey left a footprint of its own.",
    matches: |_| true,
};

/// First rule that matches, or the fallback.
pub fn matching_rule(ctx: &EndingContext<'_>) -> &'static EndingRule {
    ENDING_RULES
        .iter()
        .find(|rule| rule.matches(ctx))
        .unwrap_or(&FALLBACK_ENDING)
}

pub fn evaluate(ctx: &EndingContext<'_>) -> Ending {
    matching_rule(ctx).to_ending()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifepath_domain::{
        AttributeKey, DreamCard, LifeStatusKey, OptionEffect, OptionId, PersonalityTrait,
        PlayerState, Reflection, SparseAttributes, SparseLifeStatus, SparsePersonality,
    };

    fn state() -> PlayerState {
        PlayerState::new(DreamCard::new("t", "Test", PersonalityTrait::Investigative), 50)
    }

    fn entry(effect: OptionEffect, snapshot: PlayerSnapshot) -> ScenarioResult {
        ScenarioResult {
            scenario_id: "s".to_string(),
            option_id: OptionId::A,
            effect,
            snapshot_after: snapshot,
            reflection: Reflection::default(),
        }
    }

    fn ending_for(player: &PlayerState, effects: Vec<OptionEffect>) -> &'static str {
        let snapshot = player.snapshot();
        let history: Vec<_> = effects.into_iter().map(|e| entry(e, snapshot)).collect();
        matching_rule(&EndingContext::new(&snapshot, &history)).id
    }

    /// History that defeats the `heir` rule: one entry with no weight.
    fn unstable() -> Vec<OptionEffect> {
        vec![OptionEffect::new(); 3]
    }

    /// Attributes spread wide enough to defeat the `ghost` rule.
    fn unbalance(player: &mut PlayerState) {
        player.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Luck, 30));
    }

    #[test]
    fn rule_ids_are_unique_and_prefixed() {
        let mut ids: Vec<_> = ENDING_RULES.iter().map(|r| r.id).collect();
        ids.push(FALLBACK_ENDING.id);
        assert!(ids.iter().all(|id| id.starts_with("ending-")));
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert_eq!(before, 21);
    }

    #[test]
    fn empty_history_matches_heir() {
        assert_eq!(ending_for(&state(), vec![]), "ending-heir");
    }

    #[test]
    fn fallback_when_nothing_matches() {
        let mut player = state();
        unbalance(&mut player);
        assert_eq!(ending_for(&player, unstable()), "ending-default");
    }

    #[test]
    fn legend_needs_intellect_and_trigger() {
        let mut player = state();
        player.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Intellect, 81));
        let legend = OptionEffect::new().triggering_legend();
        assert_eq!(
            ending_for(&player, vec![legend]),
            "ending-legendary-research"
        );
        // Intellect 91 without any legend choice falls through.
        assert_ne!(ending_for(&player, unstable()), "ending-legendary-research");
    }

    #[test]
    fn legend_outranks_scandal() {
        let mut player = state();
        player.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Intellect, 81));
        player.apply_scandal_delta(150);
        let legend = OptionEffect::new().triggering_legend();
        assert_eq!(ending_for(&player, vec![legend]), "ending-legendary-research");
        assert_eq!(ending_for(&player, unstable()), "ending-scandal");
    }

    #[test]
    fn scandal_outranks_reversal_and_gambler_is_shadowed() {
        let mut player = state();
        player.apply_scandal_delta(100);
        let roulette = OptionEffect::new().with_notes("Reversal roulette: all in");
        assert_eq!(ending_for(&player, vec![roulette.clone()]), "ending-scandal");

        let mut player = state();
        player.apply_scandal_delta(10);
        assert_eq!(ending_for(&player, vec![roulette]), "ending-reversal");
    }

    #[test]
    fn billionaire_before_artist() {
        let mut player = state();
        player.apply_life_status_delta(
            &SparseLifeStatus::new()
                .with(LifeStatusKey::Money, 2_000_000)
                .with(LifeStatusKey::Happiness, -30),
        );
        assert_eq!(ending_for(&player, unstable()), "ending-tired-billionaire");
    }

    #[test]
    fn free_artist() {
        let mut player = state();
        player.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Inspiration, 80));
        player.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Happiness, 40));
        assert_eq!(ending_for(&player, unstable()), "ending-free-artist");
    }

    #[test]
    fn personality_rules_in_order() {
        let mut player = state();
        player.apply_personality_delta(
            &SparsePersonality::new()
                .with(PersonalityTrait::Social, 80)
                .with(PersonalityTrait::Conventional, 90),
        );
        assert_eq!(ending_for(&player, unstable()), "ending-mentor");

        let mut player = state();
        player.apply_personality_delta(
            &SparsePersonality::new().with(PersonalityTrait::Conventional, 85),
        );
        assert_eq!(ending_for(&player, unstable()), "ending-order-guardian");

        let mut player = state();
        player.apply_personality_delta(
            &SparsePersonality::new().with(PersonalityTrait::Investigative, 80),
        );
        assert_eq!(ending_for(&player, unstable()), "ending-data-hermit");

        let mut player = state();
        player.apply_personality_delta(
            &SparsePersonality::new()
                .with(PersonalityTrait::Enterprising, 80)
                .with(PersonalityTrait::Social, 25),
        );
        unbalance(&mut player);
        assert_eq!(ending_for(&player, unstable()), "ending-power-broker");
    }

    #[test]
    fn physical_rules() {
        let mut player = state();
        player.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Physical, 75));
        assert_eq!(ending_for(&player, unstable()), "ending-forgotten-gear");

        let mut player = state();
        player.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Physical, 85));
        player.apply_personality_delta(
            &SparsePersonality::new().with(PersonalityTrait::Enterprising, 30),
        );
        player.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Stress, 55));
        assert_eq!(ending_for(&player, unstable()), "ending-athlete");
    }

    #[test]
    fn content_tourist_and_cross_innovator() {
        let mut player = state();
        player.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Inspiration, 75));
        player.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Stress, 65));
        assert_eq!(ending_for(&player, unstable()), "ending-content-tourist");

        let mut player = state();
        player.apply_attribute_delta(
            &SparseAttributes::new()
                .with(AttributeKey::Intellect, 75)
                .with(AttributeKey::Inspiration, 75),
        );
        assert_eq!(ending_for(&player, unstable()), "ending-cross-innovator");
    }

    #[test]
    fn minimalist() {
        let mut player = state();
        player.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Happiness, 50));
        assert_eq!(ending_for(&player, unstable()), "ending-minimalist");
    }

    #[test]
    fn heir_counts_high_weight_choices() {
        let mut player = state();
        unbalance(&mut player);
        let stable = OptionEffect::new().with_consistency_weight(1.2);
        let plain = OptionEffect::new();
        // 2 of 5 is exactly 40%.
        let history = vec![stable.clone(), stable, plain.clone(), plain.clone(), plain];
        assert_eq!(ending_for(&player, history), "ending-heir");

        let low = OptionEffect::new().with_consistency_weight(1.1);
        assert_eq!(ending_for(&player, vec![low; 3]), "ending-default");
    }

    #[test]
    fn explorer_and_ghost() {
        let mut player = state();
        unbalance(&mut player);
        let mut history = unstable();
        history.push(OptionEffect::new().with_tag(NarrativeTag::Travel));
        assert_eq!(ending_for(&player, history), "ending-explorer");

        // Default attributes are perfectly balanced.
        assert_eq!(ending_for(&state(), unstable()), "ending-ghost");
    }

    #[test]
    fn martyr() {
        let mut player = state();
        player.apply_attribute_delta(&SparseAttributes::new().with(AttributeKey::Intellect, 65));
        player.apply_personality_delta(
            &SparsePersonality::new()
                .with(PersonalityTrait::Enterprising, 65)
                .with(PersonalityTrait::Social, 40),
        );
        player.apply_life_status_delta(&SparseLifeStatus::new().with(LifeStatusKey::Stress, 75));
        assert_eq!(ending_for(&player, unstable()), "ending-martyr");
    }
}
