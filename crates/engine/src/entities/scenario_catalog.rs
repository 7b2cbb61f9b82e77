//! Scenario catalog and next-scenario selection.

use std::collections::HashSet;

use lifepath_domain::{DomainError, Scenario, StageId, NEUTRAL_SCENARIO_ID};

use crate::content::builtin_scenarios;
use crate::infrastructure::ports::RandomPort;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid scenario: {0}")]
    Invalid(#[from] DomainError),
    #[error("No scenario available")]
    NoContentAvailable,
}

/// Immutable scenario content, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_scenarios())
    }

    /// Load a JSON array of scenarios and validate every entry.
    ///
    /// The neutral scenario id is reserved and rejected here.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let scenarios: Vec<Scenario> = serde_json::from_str(json)?;
        let mut ids = HashSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            scenario.validate()?;
            if scenario.is_neutral() {
                return Err(DomainError::validation(format!(
                    "Scenario id {NEUTRAL_SCENARIO_ID} is reserved"
                ))
                .into());
            }
            if !ids.insert(scenario.id.as_str()) {
                return Err(DomainError::validation(format!(
                    "Duplicate scenario id: {}",
                    scenario.id
                ))
                .into());
            }
        }
        Ok(Self::new(scenarios))
    }

    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenarios tagged with `stage`, in catalog order.
    pub fn by_stage(&self, stage: StageId) -> Vec<&Scenario> {
        self.scenarios.iter().filter(|s| s.stage == stage).collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Pick the next scenario for `stage`.
    ///
    /// Order of preference:
    /// 1. unseen scenarios of `stage`
    /// 2. unseen scenarios of the first later stage that has any
    /// 3. unseen scenarios of the first earlier stage that has any
    /// 4. any scenario of `stage` (a repeat), or of the whole catalog if
    ///    `stage` has none
    ///
    /// Fails only when the catalog is empty.
    pub fn pick_next(
        &self,
        stage: StageId,
        seen: &HashSet<String>,
        random: &dyn RandomPort,
    ) -> Result<&Scenario, CatalogError> {
        let current = self.unseen_in(stage, seen);
        if !current.is_empty() {
            return Ok(pick_uniform(&current, random));
        }

        for other in stage.later().chain(stage.earlier()) {
            let pool = self.unseen_in(other, seen);
            if !pool.is_empty() {
                tracing::debug!(
                    stage = stage.value(),
                    picked_stage = other.value(),
                    "Stage exhausted, borrowing unseen scenario"
                );
                return Ok(pick_uniform(&pool, random));
            }
        }

        let stage_pool = self.by_stage(stage);
        let pool = if stage_pool.is_empty() {
            self.scenarios.iter().collect()
        } else {
            stage_pool
        };
        if pool.is_empty() {
            return Err(CatalogError::NoContentAvailable);
        }
        tracing::debug!(
            stage = stage.value(),
            pool = pool.len(),
            "All scenarios seen, allowing a repeat"
        );
        Ok(pick_uniform(&pool, random))
    }

    fn unseen_in(&self, stage: StageId, seen: &HashSet<String>) -> Vec<&Scenario> {
        self.by_stage(stage)
            .into_iter()
            .filter(|s| !seen.contains(&s.id))
            .collect()
    }
}

/// Uniform pick from a non-empty pool.
fn pick_uniform<'a>(pool: &[&'a Scenario], random: &dyn RandomPort) -> &'a Scenario {
    let last = pool.len().saturating_sub(1);
    let drawn = random.gen_range(0, i32::try_from(last).unwrap_or(i32::MAX));
    let index = usize::try_from(drawn).unwrap_or(0).min(last);
    pool[index]
}
