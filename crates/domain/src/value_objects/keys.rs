//! Stat key value objects.
//!
//! Provides type safety for stat references instead of magic strings like
//! "I", "money", or "S".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Visible player attributes that scenarios grow or drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
    /// Intellect (I) - reasoning and study
    Intellect,
    /// Physical (R) - health and stamina
    Physical,
    /// Inspiration (A) - creative spark
    Inspiration,
    /// Luck (L)
    Luck,
}

impl AttributeKey {
    /// Returns the wire name (e.g., "intellect").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intellect => "intellect",
            Self::Physical => "physical",
            Self::Inspiration => "inspiration",
            Self::Luck => "luck",
        }
    }

    /// Returns the one-letter HUD code (e.g., "I", "R").
    pub fn code(&self) -> &'static str {
        match self {
            Self::Intellect => "I",
            Self::Physical => "R",
            Self::Inspiration => "A",
            Self::Luck => "L",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Intellect => "Intelligence",
            Self::Physical => "Physical",
            Self::Inspiration => "Inspiration",
            Self::Luck => "Luck",
        }
    }

    pub fn all() -> [AttributeKey; 4] {
        [Self::Intellect, Self::Physical, Self::Inspiration, Self::Luck]
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" => return Ok(Self::Intellect),
            "R" => return Ok(Self::Physical),
            "A" => return Ok(Self::Inspiration),
            "L" => return Ok(Self::Luck),
            _ => {}
        }
        match s.trim().to_lowercase().as_str() {
            "intellect" | "intelligence" => Ok(Self::Intellect),
            "physical" => Ok(Self::Physical),
            "inspiration" => Ok(Self::Inspiration),
            "luck" => Ok(Self::Luck),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}

/// Life status gauges shown on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeStatusKey {
    Money,
    Stress,
    Happiness,
    Integrity,
}

impl LifeStatusKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::Stress => "stress",
            Self::Happiness => "happiness",
            Self::Integrity => "integrity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Money => "Money",
            Self::Stress => "Stress",
            Self::Happiness => "Happiness",
            Self::Integrity => "Integrity",
        }
    }

    pub fn all() -> [LifeStatusKey; 4] {
        [Self::Money, Self::Stress, Self::Happiness, Self::Integrity]
    }
}

impl fmt::Display for LifeStatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LifeStatusKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "money" => Ok(Self::Money),
            "stress" => Ok(Self::Stress),
            "happiness" => Ok(Self::Happiness),
            "integrity" => Ok(Self::Integrity),
            _ => Err(DomainError::parse(format!("Unknown life status: {}", s))),
        }
    }
}

/// The six hidden personality categories (Holland RIASEC codes).
///
/// Serialized as the single-letter code, which is also how dream cards
/// name their primary and secondary traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PersonalityTrait {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl PersonalityTrait {
    /// Returns the single-letter code (e.g., "I").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Realistic => "R",
            Self::Investigative => "I",
            Self::Artistic => "A",
            Self::Social => "S",
            Self::Enterprising => "E",
            Self::Conventional => "C",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }

    pub fn all() -> [PersonalityTrait; 6] {
        [
            Self::Realistic,
            Self::Investigative,
            Self::Artistic,
            Self::Social,
            Self::Enterprising,
            Self::Conventional,
        ]
    }
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PersonalityTrait {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "R" | "REALISTIC" => Ok(Self::Realistic),
            "I" | "INVESTIGATIVE" => Ok(Self::Investigative),
            "A" | "ARTISTIC" => Ok(Self::Artistic),
            "S" | "SOCIAL" => Ok(Self::Social),
            "E" | "ENTERPRISING" => Ok(Self::Enterprising),
            "C" | "CONVENTIONAL" => Ok(Self::Conventional),
            _ => Err(DomainError::parse(format!("Unknown personality trait: {}", s))),
        }
    }
}
