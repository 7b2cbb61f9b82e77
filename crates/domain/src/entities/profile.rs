//! Onboarding profile - read-only input from the intro questionnaire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Broad motivation scored by the intro questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProfileTrait {
    Ambition,
    Creativity,
    Stability,
}

impl ProfileTrait {
    pub fn all() -> [ProfileTrait; 3] {
        [Self::Ambition, Self::Creativity, Self::Stability]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ambition => "Ambition",
            Self::Creativity => "Creativity",
            Self::Stability => "Stability",
        }
    }
}

impl fmt::Display for ProfileTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProfileTrait {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ambition" => Ok(Self::Ambition),
            "creativity" => Ok(Self::Creativity),
            "stability" => Ok(Self::Stability),
            _ => Err(DomainError::parse(format!("Unknown profile trait: {}", s))),
        }
    }
}

/// A career direction shown in the end-of-run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub title: String,
    pub description: String,
}

impl CareerSuggestion {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Player profile collected before the run. The engine never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Traits the questionnaire asked about. Empty means all of them.
    #[serde(default)]
    pub declared_traits: Vec<ProfileTrait>,
    #[serde(default)]
    pub trait_scores: BTreeMap<ProfileTrait, i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_career_label: Option<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_score(mut self, trait_key: ProfileTrait, score: i64) -> Self {
        self.trait_scores.insert(trait_key, score);
        self
    }

    pub fn with_declared_traits(mut self, traits: impl IntoIterator<Item = ProfileTrait>) -> Self {
        self.declared_traits = traits.into_iter().collect();
        self
    }

    /// Highest-scoring declared trait. Ties go to the earlier trait in
    /// Ambition, Creativity, Stability order. `None` without any scores.
    pub fn dominant_trait(&self) -> Option<ProfileTrait> {
        let candidates = ProfileTrait::all().into_iter().filter(|key| {
            self.declared_traits.is_empty() || self.declared_traits.contains(key)
        });
        let scored: Vec<(ProfileTrait, i64)> = candidates
            .filter_map(|key| self.trait_scores.get(&key).map(|score| (key, *score)))
            .collect();
        if scored.is_empty() {
            return None;
        }
        let (best, _) = scored.into_iter().fold(
            (ProfileTrait::Stability, -1),
            |(best_key, best_score), (key, score)| {
                if score > best_score {
                    (key, score)
                } else {
                    (best_key, best_score)
                }
            },
        );
        Some(best)
    }
}
