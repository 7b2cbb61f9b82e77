//! Categorical flags derived from continuous counters.
//!
//! - ScandalLevel: sticky tier over the scandal counter (none -> warning -> max)
//! - HaggardLevel: fatigue flag, recomputed every turn
//! - Mood: presentation tier combining the two
//!
//! The transition functions are pure so the "never downgrades" and
//! "integrity can trigger a warning" rules live in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scandal counter value at which the warning tier is reached.
pub const SCANDAL_WARNING_THRESHOLD: i64 = 40;
/// Scandal counter value at which the max tier is reached.
pub const SCANDAL_MAX_THRESHOLD: i64 = 100;
/// Integrity below this forces at least a warning at turn end.
pub const INTEGRITY_WARNING_FLOOR: i64 = 20;
/// Stress at or above this makes the player haggard.
pub const HAGGARD_STRESS_THRESHOLD: i64 = 80;
/// Physical at or below this makes the player haggard.
pub const HAGGARD_PHYSICAL_THRESHOLD: i64 = 15;

/// Sticky scandal tier. Ordered so `None < Warning < Max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScandalLevel {
    #[default]
    None,
    Warning,
    Max,
}

impl ScandalLevel {
    /// Tier implied by the counter alone.
    pub fn for_value(scandal_value: i64) -> Self {
        if scandal_value >= SCANDAL_MAX_THRESHOLD {
            Self::Max
        } else if scandal_value >= SCANDAL_WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::None
        }
    }

    /// Transition after the scandal counter changed. Never downgrades.
    pub fn after_scandal_change(self, scandal_value: i64) -> Self {
        self.max(Self::for_value(scandal_value))
    }

    /// Transition at turn end: low integrity forces a warning unless already max.
    pub fn after_turn_end(self, integrity: i64) -> Self {
        if integrity < INTEGRITY_WARNING_FLOOR && self != Self::Max {
            Self::Warning
        } else {
            self
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Warning => "warning",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for ScandalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fatigue flag. Not sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaggardLevel {
    #[default]
    None,
    Haggard,
}

impl HaggardLevel {
    pub fn evaluate(stress: i64, physical: i64) -> Self {
        if stress >= HAGGARD_STRESS_THRESHOLD || physical <= HAGGARD_PHYSICAL_THRESHOLD {
            Self::Haggard
        } else {
            Self::None
        }
    }

    pub fn is_haggard(&self) -> bool {
        matches!(self, Self::Haggard)
    }
}

/// How the player character should look on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Normal,
    Haggard,
    Scandal,
}

impl Mood {
    /// Any scandal tier outranks fatigue.
    pub fn from_levels(scandal: ScandalLevel, haggard: HaggardLevel) -> Self {
        if scandal != ScandalLevel::None {
            Self::Scandal
        } else if haggard.is_haggard() {
            Self::Haggard
        } else {
            Self::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scandal_tiers_by_value() {
        assert_eq!(ScandalLevel::for_value(0), ScandalLevel::None);
        assert_eq!(ScandalLevel::for_value(39), ScandalLevel::None);
        assert_eq!(ScandalLevel::for_value(40), ScandalLevel::Warning);
        assert_eq!(ScandalLevel::for_value(100), ScandalLevel::Max);
    }

    #[test]
    fn scandal_never_downgrades() {
        let level = ScandalLevel::Max.after_scandal_change(0);
        assert_eq!(level, ScandalLevel::Max);
        let level = ScandalLevel::Warning.after_scandal_change(10);
        assert_eq!(level, ScandalLevel::Warning);
        let level = ScandalLevel::Warning.after_scandal_change(120);
        assert_eq!(level, ScandalLevel::Max);
    }

    #[test]
    fn low_integrity_forces_warning_but_not_over_max() {
        assert_eq!(ScandalLevel::None.after_turn_end(19), ScandalLevel::Warning);
        assert_eq!(ScandalLevel::None.after_turn_end(20), ScandalLevel::None);
        assert_eq!(ScandalLevel::Max.after_turn_end(0), ScandalLevel::Max);
    }

    #[test]
    fn haggard_from_stress_or_physical() {
        assert_eq!(HaggardLevel::evaluate(80, 50), HaggardLevel::Haggard);
        assert_eq!(HaggardLevel::evaluate(10, 15), HaggardLevel::Haggard);
        assert_eq!(HaggardLevel::evaluate(79, 16), HaggardLevel::None);
    }

    #[test]
    fn mood_prefers_scandal_over_haggard() {
        assert_eq!(
            Mood::from_levels(ScandalLevel::Warning, HaggardLevel::Haggard),
            Mood::Scandal
        );
        assert_eq!(
            Mood::from_levels(ScandalLevel::None, HaggardLevel::Haggard),
            Mood::Haggard
        );
        assert_eq!(
            Mood::from_levels(ScandalLevel::None, HaggardLevel::None),
            Mood::Normal
        );
    }
}
