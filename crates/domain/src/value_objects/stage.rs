//! Life stages and the turn-to-stage mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Run length the stage thresholds were written against.
pub const DEFAULT_TOTAL_TURNS: u32 = 50;

/// Elapsed-turn thresholds for stages 2..=5, relative to [`DEFAULT_TOTAL_TURNS`].
const STAGE_THRESHOLDS: [(u32, u8); 4] = [(40, 5), (30, 4), (20, 3), (10, 2)];

/// Coarse phase of a run, 1 through 5.
///
/// # Invariants
///
/// - Always within `1..=5` (enforced by [`StageId::new`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StageId(u8);

impl StageId {
    pub const FIRST: StageId = StageId(1);
    pub const LAST: StageId = StageId(5);

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::parse(format!(
                "Stage must be between 1 and 5, got {}",
                value
            )))
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// All stages in order.
    pub fn all() -> [StageId; 5] {
        [StageId(1), StageId(2), StageId(3), StageId(4), StageId(5)]
    }

    /// Stages strictly after this one, in increasing order.
    pub fn later(self) -> impl Iterator<Item = StageId> {
        ((self.0 + 1)..=Self::LAST.0).map(StageId)
    }

    /// Stages strictly before this one, in increasing order.
    pub fn earlier(self) -> impl Iterator<Item = StageId> {
        (Self::FIRST.0..self.0).map(StageId)
    }

    /// Stage for a number of elapsed turns on the 50-turn scale.
    pub fn from_elapsed(elapsed: u32) -> Self {
        STAGE_THRESHOLDS
            .iter()
            .find(|(threshold, _)| elapsed >= *threshold)
            .map(|(_, stage)| StageId(*stage))
            .unwrap_or(Self::FIRST)
    }
}

impl Default for StageId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for StageId {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StageId> for u8 {
    fn from(value: StageId) -> Self {
        value.0
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How elapsed turns map to stages when a run is not 50 turns long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageScaling {
    /// Elapsed turns are counted as `50 - turns_remaining`, whatever the
    /// configured run length. A 20-turn run starts its first turn in stage 4;
    /// a 60-turn run spends its first ten turns in stage 1 before counting.
    #[default]
    Fixed,
    /// Elapsed turns are rescaled onto the 50-turn thresholds, so every run
    /// passes through all five stages in proportion.
    Proportional,
}

impl StageScaling {
    pub fn stage_for(self, total_turns: u32, turns_remaining: u32) -> StageId {
        let elapsed = match self {
            Self::Fixed => DEFAULT_TOTAL_TURNS.saturating_sub(turns_remaining),
            Self::Proportional => {
                if total_turns == 0 {
                    0
                } else {
                    let actual = u64::from(total_turns.saturating_sub(turns_remaining));
                    let scaled = actual * u64::from(DEFAULT_TOTAL_TURNS) / u64::from(total_turns);
                    u32::try_from(scaled).unwrap_or(u32::MAX)
                }
            }
        };
        StageId::from_elapsed(elapsed)
    }
}

impl FromStr for StageScaling {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "proportional" => Ok(Self::Proportional),
            _ => Err(DomainError::parse(format!("Unknown stage scaling: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_rejects_out_of_range() {
        assert!(StageId::new(0).is_err());
        assert!(StageId::new(6).is_err());
        assert_eq!(StageId::new(3).unwrap().value(), 3);
    }

    #[test]
    fn stage_deserialize_validates_range() {
        let stage: StageId = serde_json::from_str("2").unwrap();
        assert_eq!(stage.value(), 2);
        assert!(serde_json::from_str::<StageId>("9").is_err());
    }

    #[test]
    fn thresholds_on_the_fifty_turn_scale() {
        assert_eq!(StageId::from_elapsed(0).value(), 1);
        assert_eq!(StageId::from_elapsed(9).value(), 1);
        assert_eq!(StageId::from_elapsed(10).value(), 2);
        assert_eq!(StageId::from_elapsed(29).value(), 3);
        assert_eq!(StageId::from_elapsed(30).value(), 4);
        assert_eq!(StageId::from_elapsed(40).value(), 5);
        assert_eq!(StageId::from_elapsed(500).value(), 5);
    }

    #[test]
    fn fixed_scaling_counts_against_fifty() {
        // 20-turn run, one turn played: 50 - 19 = 31 elapsed on the fixed scale
        assert_eq!(StageScaling::Fixed.stage_for(20, 19).value(), 4);
        // 60-turn run, one turn played: nothing counted yet
        assert_eq!(StageScaling::Fixed.stage_for(60, 59).value(), 1);
        assert_eq!(StageScaling::Fixed.stage_for(50, 40).value(), 2);
    }

    #[test]
    fn proportional_scaling_rescales() {
        assert_eq!(StageScaling::Proportional.stage_for(20, 19).value(), 1);
        assert_eq!(StageScaling::Proportional.stage_for(20, 16).value(), 2);
        assert_eq!(StageScaling::Proportional.stage_for(20, 4).value(), 5);
        assert_eq!(StageScaling::Proportional.stage_for(0, 0).value(), 1);
    }

    #[test]
    fn later_and_earlier_stages() {
        let stage = StageId::new(3).unwrap();
        let later: Vec<u8> = stage.later().map(StageId::value).collect();
        let earlier: Vec<u8> = stage.earlier().map(StageId::value).collect();
        assert_eq!(later, vec![4, 5]);
        assert_eq!(earlier, vec![1, 2]);
        assert_eq!(StageId::LAST.later().count(), 0);
    }
}
