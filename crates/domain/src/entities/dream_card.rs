//! Dream cards - the long-term archetype a player commits to for one run.

use serde::{Deserialize, Serialize};

use super::profile::{Profile, ProfileTrait};
use crate::value_objects::PersonalityTrait;

/// Starting consistency granted when the chosen card is the one the
/// player's profile recommends.
pub const DESTINY_BONUS: i64 = 10;

/// Archetype chosen once per run. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamCard {
    pub id: String,
    pub label: String,
    pub primary_trait: PersonalityTrait,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_trait: Option<PersonalityTrait>,
}

impl DreamCard {
    pub fn new(id: impl Into<String>, label: impl Into<String>, primary: PersonalityTrait) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            primary_trait: primary,
            secondary_trait: None,
        }
    }

    pub fn with_secondary(mut self, secondary: PersonalityTrait) -> Self {
        self.secondary_trait = Some(secondary);
        self
    }

    /// Card id recommended for a dominant profile trait.
    pub fn recommended_id_for(trait_key: ProfileTrait) -> &'static str {
        match trait_key {
            ProfileTrait::Ambition => "founder",
            ProfileTrait::Creativity => "artist",
            ProfileTrait::Stability => "surgeon",
        }
    }

    /// Starting consistency bonus this card earns for `profile`.
    pub fn destiny_bonus(&self, profile: &Profile) -> i64 {
        match profile.dominant_trait() {
            Some(dominant) if Self::recommended_id_for(dominant) == self.id => DESTINY_BONUS,
            _ => 0,
        }
    }
}
