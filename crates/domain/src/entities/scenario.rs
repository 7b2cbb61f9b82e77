//! Scenario entities - narrative situations and the options they offer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::effect::OptionEffect;
use crate::value_objects::{
    AttributeKey, Attributes, LifeStatus, LifeStatusKey, SparseAttributes, SparseLifeStatus,
    StageId,
};
use crate::DomainError;

/// Maximum number of options a scenario may offer.
pub const MAX_OPTIONS: usize = 4;

/// Id of the synthetic scenario used when no content is left.
pub const NEUTRAL_SCENARIO_ID: &str = "neutral-fallback";

/// Option letter within a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionId {
    A,
    B,
    C,
    D,
}

impl OptionId {
    pub fn all() -> [OptionId; 4] {
        [Self::A, Self::B, Self::C, Self::D]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OptionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(DomainError::parse(format!("Unknown option id: {}", s))),
        }
    }
}

/// A threshold the player fails to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmetRequirement {
    /// Wire name of the stat (e.g., "intellect", "money")
    pub key: &'static str,
    pub required: i64,
    pub actual: i64,
}

/// Minimum thresholds gating an option (or a whole scenario).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "SparseAttributes::is_empty")]
    pub min_attributes: SparseAttributes,
    #[serde(default, skip_serializing_if = "SparseLifeStatus::is_empty")]
    pub min_life_status: SparseLifeStatus,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_attribute(mut self, key: AttributeKey, value: i64) -> Self {
        self.min_attributes.set(key, value);
        self
    }

    pub fn min_life_status(mut self, key: LifeStatusKey, value: i64) -> Self {
        self.min_life_status.set(key, value);
        self
    }

    /// First unmet threshold, attributes before life status, keys in
    /// declaration order. `None` means every threshold is met.
    pub fn first_unmet(
        &self,
        attributes: &Attributes,
        life_status: &LifeStatus,
    ) -> Option<UnmetRequirement> {
        let attribute_miss = self.min_attributes.iter().find_map(|(key, required)| {
            let actual = attributes.get(key);
            (actual < required).then_some(UnmetRequirement {
                key: key.as_str(),
                required,
                actual,
            })
        });
        attribute_miss.or_else(|| {
            self.min_life_status.iter().find_map(|(key, required)| {
                let actual = life_status.get(key);
                (actual < required).then_some(UnmetRequirement {
                    key: key.as_str(),
                    required,
                    actual,
                })
            })
        })
    }

    pub fn is_met(&self, attributes: &Attributes, life_status: &LifeStatus) -> bool {
        self.first_unmet(attributes, life_status).is_none()
    }
}

/// One choice inside a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOption {
    pub id: OptionId,
    pub label: String,
    #[serde(default)]
    pub effect: OptionEffect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
}

impl ScenarioOption {
    pub fn new(id: OptionId, label: impl Into<String>, effect: OptionEffect) -> Self {
        Self {
            id,
            label: label.into(),
            effect,
            requirements: None,
        }
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = Some(requirements);
        self
    }
}

/// A narrative situation. Immutable once loaded.
///
/// # Invariants
///
/// - 1 to 4 options with distinct ids (checked by [`Scenario::validate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub stage: StageId,
    pub title: String,
    pub description: String,
    pub options: Vec<ScenarioOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
}

impl Scenario {
    pub fn new(
        id: impl Into<String>,
        stage: StageId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            stage,
            title: title.into(),
            description: description.into(),
            options: Vec::new(),
            requirements: None,
        }
    }

    pub fn with_option(mut self, option: ScenarioOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = Some(requirements);
        self
    }

    /// The synthetic scenario offered when the catalog has nothing at all.
    /// Every option is a no-op.
    pub fn neutral(stage: StageId) -> Self {
        let labels = [
            (OptionId::A, "Keep moving steadily"),
            (OptionId::B, "Try a new path"),
            (OptionId::C, "Pause and rest"),
            (OptionId::D, "Leave it to fate"),
        ];
        let scenario = Self::new(
            NEUTRAL_SCENARIO_ID,
            stage,
            "A quiet moment",
            "Nothing in particular happens. Pick any option to carry on.",
        );
        labels.into_iter().fold(scenario, |scenario, (id, label)| {
            scenario.with_option(ScenarioOption::new(id, label, OptionEffect::new()))
        })
    }

    pub fn is_neutral(&self) -> bool {
        self.id == NEUTRAL_SCENARIO_ID
    }

    pub fn option(&self, id: OptionId) -> Option<&ScenarioOption> {
        self.options.iter().find(|option| option.id == id)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::validation("Scenario id cannot be empty"));
        }
        if self.options.is_empty() || self.options.len() > MAX_OPTIONS {
            return Err(DomainError::validation(format!(
                "Scenario {} must have 1 to {} options, has {}",
                self.id,
                MAX_OPTIONS,
                self.options.len()
            )));
        }
        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.id) {
                return Err(DomainError::validation(format!(
                    "Scenario {} has duplicate option {}",
                    self.id, option.id
                )));
            }
        }
        Ok(())
    }
}
