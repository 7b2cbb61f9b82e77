//! Option effects - the sparse patch a chosen option applies to the player.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::{
    AttributeKey, LifeStatusKey, PersonalityTrait, SparseAttributes, SparseLifeStatus,
    SparsePersonality,
};
use crate::DomainError;

/// Structured narrative markers that ending rules look for in the history.
///
/// Content can attach them explicitly through `tags`; older content that
/// only carries free-text `notes` is still recognised by marker substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeTag {
    /// The player bet their life on the reversal roulette.
    ReversalRoulette,
    /// The player chose to travel.
    Travel,
}

impl NarrativeTag {
    pub fn all() -> [NarrativeTag; 2] {
        [Self::ReversalRoulette, Self::Travel]
    }

    /// Substring that marks this tag inside free-text notes.
    pub fn note_marker(&self) -> &'static str {
        match self {
            Self::ReversalRoulette => "Reversal roulette",
            Self::Travel => "Travel",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReversalRoulette => "reversal_roulette",
            Self::Travel => "travel",
        }
    }
}

impl fmt::Display for NarrativeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NarrativeTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reversal_roulette" => Ok(Self::ReversalRoulette),
            "travel" => Ok(Self::Travel),
            _ => Err(DomainError::parse(format!("Unknown narrative tag: {}", s))),
        }
    }
}

/// Boolean triggers an option can raise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTriggers {
    #[serde(default)]
    pub scandal: bool,
    /// Accepted in content but inert: the haggard level is derived from
    /// stress and physical after every turn, never from this flag.
    #[serde(default)]
    pub haggard: bool,
    #[serde(default)]
    pub legend: bool,
}

impl EffectTriggers {
    pub fn is_empty(&self) -> bool {
        !self.scandal && !self.haggard && !self.legend
    }
}

/// Sparse patch applied when an option is chosen.
///
/// All fields are optional; an empty effect is a valid no-op choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionEffect {
    #[serde(default, skip_serializing_if = "SparseAttributes::is_empty")]
    pub attributes: SparseAttributes,
    #[serde(default, skip_serializing_if = "SparseLifeStatus::is_empty")]
    pub life_status: SparseLifeStatus,
    #[serde(default, skip_serializing_if = "SparsePersonality::is_empty")]
    pub personality: SparsePersonality,
    /// Amplifies or dampens how strongly this choice counts toward the dream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scandal_delta: Option<i64>,
    #[serde(default, skip_serializing_if = "EffectTriggers::is_empty")]
    pub triggers: EffectTriggers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<NarrativeTag>,
}

impl OptionEffect {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_attribute(mut self, key: AttributeKey, delta: i64) -> Self {
        self.attributes.set(key, delta);
        self
    }

    pub fn with_life_status(mut self, key: LifeStatusKey, delta: i64) -> Self {
        self.life_status.set(key, delta);
        self
    }

    pub fn with_personality(mut self, key: PersonalityTrait, delta: i64) -> Self {
        self.personality.set(key, delta);
        self
    }

    pub fn with_consistency_weight(mut self, weight: f64) -> Self {
        self.consistency_weight = Some(weight);
        self
    }

    pub fn with_scandal_delta(mut self, delta: i64) -> Self {
        self.scandal_delta = Some(delta);
        self
    }

    pub fn triggering_scandal(mut self) -> Self {
        self.triggers.scandal = true;
        self
    }

    pub fn triggering_legend(mut self) -> Self {
        self.triggers.legend = true;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_tag(mut self, tag: NarrativeTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// True if the effect changes anything the HUD shows.
    pub fn touches_visible_stats(&self) -> bool {
        !self.attributes.is_empty() || !self.life_status.is_empty()
    }

    /// Weight used when folding the ending score; absent means 1.
    pub fn ending_weight(&self) -> f64 {
        self.consistency_weight.unwrap_or(1.0)
    }

    /// Explicit tags plus tags whose marker appears in the notes.
    pub fn narrative_tags(&self) -> Vec<NarrativeTag> {
        NarrativeTag::all()
            .into_iter()
            .filter(|tag| self.has_tag(*tag))
            .collect()
    }

    pub fn has_tag(&self, tag: NarrativeTag) -> bool {
        self.tags.contains(&tag)
            || self
                .notes
                .as_deref()
                .is_some_and(|notes| notes.contains(tag.note_marker()))
    }
}
