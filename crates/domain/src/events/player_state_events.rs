//! Player-state domain events
//!
//! These communicate what changed when the player state was mutated,
//! so the engine can log and react without diffing snapshots.

use crate::value_objects::{HaggardLevel, ScandalLevel, StageId};

/// Outcome of changing the scandal counter (or ending a turn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScandalShift {
    /// Tier did not change
    Unchanged { level: ScandalLevel },
    /// Tier moved up
    Escalated {
        from: ScandalLevel,
        to: ScandalLevel,
    },
}

impl ScandalShift {
    pub fn between(from: ScandalLevel, to: ScandalLevel) -> Self {
        if from == to {
            Self::Unchanged { level: to }
        } else {
            Self::Escalated { from, to }
        }
    }

    pub fn level(&self) -> ScandalLevel {
        match self {
            Self::Unchanged { level } => *level,
            Self::Escalated { to, .. } => *to,
        }
    }
}

/// Outcome of recomputing the stage at turn end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTransition {
    Unchanged { stage: StageId },
    Advanced { from: StageId, to: StageId },
}

impl StageTransition {
    pub fn stage(&self) -> StageId {
        match self {
            Self::Unchanged { stage } => *stage,
            Self::Advanced { to, .. } => *to,
        }
    }
}

/// Everything that changed when a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEnded {
    pub turns_remaining: u32,
    pub stage: StageTransition,
    pub haggard: HaggardLevel,
    pub scandal: ScandalShift,
    /// True when this was the last turn of the run
    pub run_complete: bool,
}
