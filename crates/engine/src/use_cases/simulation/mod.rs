//! Simulation use case - drives one life from the first turn to its ending.
//!
//! A run is single-threaded and caller-driven: the caller asks for the next
//! scenario, resolves one of its options, and repeats until the run is
//! complete. Callers that share one engine across threads must synchronise
//! access themselves.

mod endings;
mod report;


use std::collections::HashSet;
use std::sync::Arc;

use lifepath_domain::common::{clamp_i64, round_half_up};
use lifepath_domain::{
    consistency, DreamCard, Ending, LifeStatusKey, OptionId, PlayerSnapshot, PlayerState, Profile,
    Reflection, RunId, Scenario, ScenarioOption, ScenarioResult, ScandalShift, StageScaling,
    StageTransition, DEFAULT_TOTAL_TURNS, NEUTRAL_SCENARIO_ID,
};

use crate::entities::ScenarioCatalog;
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{ClockPort, RandomPort};

pub use endings::{EndingContext, EndingRule, ENDING_RULES, FALLBACK_ENDING};
pub use report::LifeReport;

/// Flat scandal bump applied when an option triggers a scandal, on top of
/// any explicit `scandalDelta`.
pub const SCANDAL_TRIGGER_BUMP: i64 = 20;
/// Bound on the ending score, in both directions.
pub const MAX_ENDING_SCORE: i64 = 500;

/// Errors that can occur while resolving a turn.
///
/// Every error leaves the player state and history untouched.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),
    #[error("Option {option_id} not found in scenario {scenario_id}")]
    OptionNotFound {
        scenario_id: String,
        option_id: OptionId,
    },
    #[error("Requirement not met for option {option_id}: {key} is {actual}, needs {required}")]
    RequirementNotMet {
        option_id: OptionId,
        key: &'static str,
        required: i64,
        actual: i64,
    },
    #[error("No scenario available")]
    NoContentAvailable,
    #[error("Run already complete after {total_turns} turns")]
    RunComplete { total_turns: u32 },
}

// =============================================================================
// Run Setup
// =============================================================================

/// Construction parameters for one run.
#[derive(Debug, Clone)]
pub struct RunSetup {
    dream_card: DreamCard,
    total_turns: u32,
    stage_scaling: StageScaling,
    catalog: Option<ScenarioCatalog>,
    initial_consistency: i64,
    neutral_choice_happiness: i64,
}

impl RunSetup {
    pub fn new(dream_card: DreamCard) -> Self {
        Self {
            dream_card,
            total_turns: DEFAULT_TOTAL_TURNS,
            stage_scaling: StageScaling::default(),
            catalog: None,
            initial_consistency: 0,
            neutral_choice_happiness: 0,
        }
    }

    pub fn with_total_turns(mut self, total_turns: u32) -> Self {
        self.total_turns = total_turns;
        self
    }

    pub fn with_stage_scaling(mut self, scaling: StageScaling) -> Self {
        self.stage_scaling = scaling;
        self
    }

    /// Use `catalog` instead of the built-in scenarios.
    pub fn with_catalog(mut self, catalog: ScenarioCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_initial_consistency(mut self, bonus: i64) -> Self {
        self.initial_consistency = bonus;
        self
    }

    /// Grant the destiny bonus when the dream card is the profile's recommendation.
    pub fn with_profile_bonus(mut self, profile: &Profile) -> Self {
        self.initial_consistency += self.dream_card.destiny_bonus(profile);
        self
    }

    /// Happiness granted by choices that change no visible stat. 0 disables it.
    pub fn with_neutral_choice_happiness(mut self, happiness: i64) -> Self {
        self.neutral_choice_happiness = happiness;
        self
    }

    pub fn with_config(self, config: &EngineConfig) -> Self {
        self.with_total_turns(config.total_turns)
            .with_stage_scaling(config.stage_scaling)
            .with_neutral_choice_happiness(config.neutral_choice_happiness)
    }

    pub fn start(self, random: Arc<dyn RandomPort>, clock: Arc<dyn ClockPort>) -> SimulationEngine {
        let run_id = RunId::from_uuid(random.gen_uuid());
        let mut player =
            PlayerState::new(self.dream_card, self.total_turns).with_stage_scaling(self.stage_scaling);
        if self.initial_consistency != 0 {
            player.apply_consistency_delta(self.initial_consistency);
        }

        tracing::info!(
            run_id = %run_id,
            dream_card = %player.dream_card().id,
            total_turns = self.total_turns,
            initial_consistency = self.initial_consistency,
            "Run started"
        );

        SimulationEngine {
            run_id,
            player,
            catalog: self.catalog.unwrap_or_else(ScenarioCatalog::builtin),
            history: Vec::new(),
            seen: HashSet::new(),
            neutral_choice_happiness: self.neutral_choice_happiness,
            random,
            clock,
        }
    }
}

// =============================================================================
// Simulation Engine
// =============================================================================

/// One run: the player state, its history, and the content it draws from.
pub struct SimulationEngine {
    run_id: RunId,
    player: PlayerState,
    catalog: ScenarioCatalog,
    history: Vec<ScenarioResult>,
    seen: HashSet<String>,
    neutral_choice_happiness: i64,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
}

impl SimulationEngine {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn dream_card(&self) -> &DreamCard {
        self.player.dream_card()
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.player.snapshot()
    }

    pub fn history(&self) -> &[ScenarioResult] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.player.is_complete()
    }

    /// Spin the six-sided life wheel.
    pub fn spin_wheel(&self) -> u8 {
        let roll = self.random.gen_range(1, 6).clamp(1, 6);
        u8::try_from(roll).unwrap_or(1)
    }

    /// Scenario for the current stage, or `None` once the run is complete.
    ///
    /// When the catalog has nothing to offer, a neutral scenario with four
    /// no-op options stands in so the run never stalls.
    pub fn next_scenario(&self) -> Option<Scenario> {
        if self.is_complete() {
            return None;
        }
        let stage = self.player.stage();
        match self.pick_from_catalog() {
            Ok(scenario) => Some(scenario),
            Err(e) => {
                tracing::warn!(
                    run_id = %self.run_id,
                    stage = stage.value(),
                    error = %e,
                    "Substituting neutral scenario"
                );
                Some(Scenario::neutral(stage))
            }
        }
    }

    /// Catalog pick for the current stage without the neutral stand-in.
    pub fn pick_from_catalog(&self) -> Result<Scenario, SimulationError> {
        self.catalog
            .pick_next(self.player.stage(), &self.seen, self.random.as_ref())
            .map(Scenario::clone)
            // Selection only fails on an empty catalog.
            .map_err(|_| SimulationError::NoContentAvailable)
    }

    /// True if the player does not currently meet `option`'s requirements.
    pub fn is_option_locked(&self, option: &ScenarioOption) -> bool {
        option.requirements.is_some_and(|requirements| {
            !requirements.is_met(self.player.attributes(), self.player.life_status())
        })
    }

    /// Apply the chosen option and close the turn.
    ///
    /// All-or-nothing: lookups and requirement checks happen before any
    /// mutation.
    pub fn resolve_scenario(
        &mut self,
        scenario_id: &str,
        option_id: OptionId,
    ) -> Result<ScenarioResult, SimulationError> {
        if self.is_complete() {
            return Err(SimulationError::RunComplete {
                total_turns: self.player.total_turns(),
            });
        }

        let option = self.find_option(scenario_id, option_id)?;
        if let Some(unmet) = option.requirements.and_then(|requirements| {
            requirements.first_unmet(self.player.attributes(), self.player.life_status())
        }) {
            tracing::debug!(
                run_id = %self.run_id,
                scenario_id,
                option_id = %option_id,
                key = unmet.key,
                "Option locked"
            );
            return Err(SimulationError::RequirementNotMet {
                option_id,
                key: unmet.key,
                required: unmet.required,
                actual: unmet.actual,
            });
        }

        let mut effect = option.effect;
        if self.neutral_choice_happiness > 0 && !effect.touches_visible_stats() {
            effect
                .life_status
                .set(LifeStatusKey::Happiness, self.neutral_choice_happiness);
        }

        self.player.apply_attribute_delta(&effect.attributes);
        self.player.apply_life_status_delta(&effect.life_status);
        self.player.apply_personality_delta(&effect.personality);
        if let Some(delta) = effect.scandal_delta {
            let shift = self.player.apply_scandal_delta(delta);
            self.log_scandal_shift(shift);
        }
        if effect.triggers.scandal {
            let shift = self.player.apply_scandal_delta(SCANDAL_TRIGGER_BUMP);
            self.log_scandal_shift(shift);
        }

        let scored = consistency::score(self.player.dream_card(), &effect);
        self.player.apply_consistency_delta(scored.delta);

        let turn = self.player.end_turn();
        if let StageTransition::Advanced { from, to } = turn.stage {
            tracing::info!(
                run_id = %self.run_id,
                from = from.value(),
                to = to.value(),
                "Stage advanced"
            );
        }
        self.log_scandal_shift(turn.scandal);

        let result = ScenarioResult {
            scenario_id: scenario_id.to_string(),
            option_id,
            effect,
            snapshot_after: self.player.snapshot(),
            reflection: Reflection::from(scored),
        };

        tracing::debug!(
            run_id = %self.run_id,
            scenario_id,
            option_id = %option_id,
            stage = turn.stage.stage().value(),
            delta = result.reflection.consistency_delta,
            turns_remaining = turn.turns_remaining,
            "Turn resolved"
        );
        if turn.run_complete {
            tracing::info!(run_id = %self.run_id, turns = self.history.len() + 1, "Run complete");
        }

        self.seen.insert(scenario_id.to_string());
        self.history.push(result.clone());
        Ok(result)
    }

    /// Weighted sum of consistency deltas minus scandal penalties over the
    /// whole history, rounded and bounded to `[-500, 500]`.
    pub fn get_ending_score(&self) -> i64 {
        let raw: f64 = self
            .history
            .iter()
            .map(|entry| {
                entry.effect.ending_weight() * entry.reflection.consistency_delta as f64
                    - entry.reflection.scandal_penalty as f64
            })
            .sum();
        clamp_i64(round_half_up(raw), -MAX_ENDING_SCORE, MAX_ENDING_SCORE)
    }

    pub fn evaluate_ending(&self) -> Ending {
        let snapshot = self.player.snapshot();
        endings::evaluate(&EndingContext::new(&snapshot, &self.history))
    }

    pub fn generate_report(&self, profile: Option<&Profile>) -> LifeReport {
        let ending = self.evaluate_ending();
        tracing::info!(run_id = %self.run_id, ending = %ending.id, "Ending chosen");
        LifeReport {
            run_id: self.run_id,
            ending,
            ending_score: self.get_ending_score(),
            personality: self.player.hidden().personality,
            stage_summaries: report::stage_summaries(&self.history, &self.catalog),
            suggested_careers: report::suggested_careers(profile),
            turns_played: self.player.turns_elapsed(),
            generated_at: self.clock.now(),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn find_option(
        &self,
        scenario_id: &str,
        option_id: OptionId,
    ) -> Result<ScenarioOption, SimulationError> {
        let neutral;
        let scenario = match self.catalog.by_id(scenario_id) {
            Some(scenario) => scenario,
            None if scenario_id == NEUTRAL_SCENARIO_ID => {
                neutral = Scenario::neutral(self.player.stage());
                &neutral
            }
            None => return Err(SimulationError::ScenarioNotFound(scenario_id.to_string())),
        };
        scenario
            .option(option_id)
            .cloned()
            .ok_or_else(|| SimulationError::OptionNotFound {
                scenario_id: scenario_id.to_string(),
                option_id,
            })
    }

    fn log_scandal_shift(&self, shift: ScandalShift) {
        if let ScandalShift::Escalated { from, to } = shift {
            tracing::info!(
                run_id = %self.run_id,
                from = %from,
                to = %to,
                scandal_value = self.player.hidden().scandal_value,
                "Scandal level escalated"
            );
        }
    }
}
