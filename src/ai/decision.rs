//! Decision types

use serde::{Deserialize, Serialize};

use crate::ai::scoring::ScoreBreakdown;
use crate::economy::archetype::Archetype;

/// A mutually exclusive world action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Build a new level-1 facility from an archetype
    Build(Archetype),
    /// Raise the facility at this index by one level
    Expand(usize),
}

/// A scored action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub action: Action,
    /// Treasury the action would spend
    pub cost: f64,
    pub breakdown: ScoreBreakdown,
    pub score: f64,
}

/// The engine's choice for this tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// `None` when no candidate exists or the best is under threshold
    pub action: Option<Action>,
    /// Best score seen, `NEG_INFINITY` with no candidates
    pub score: f64,
}

impl Decision {
    pub fn none(score: f64) -> Self {
        Self {
            action: None,
            score,
        }
    }
}

/// What committing a decision did to the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DecisionOutcome {
    NoAction {
        best_score: f64,
    },
    Built {
        facility_idx: usize,
        archetype: Archetype,
        cost: f64,
        score: f64,
    },
    Expanded {
        facility_idx: usize,
        new_level: u32,
        cost: f64,
        score: f64,
    },
    /// Treasury could not cover the chosen action; nothing changed
    Unaffordable {
        action: Action,
        cost: f64,
        treasury: f64,
        score: f64,
    },
    /// EXPAND pointed at a facility that does not exist; nothing changed
    TargetMissing {
        facility_idx: usize,
        score: f64,
    },
    /// Storage for a new facility could not be allocated; nothing changed
    AllocationFailed {
        action: Action,
        cost: f64,
        score: f64,
        reason: String,
    },
}

impl DecisionOutcome {
    /// True if the world was mutated
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            DecisionOutcome::Built { .. } | DecisionOutcome::Expanded { .. }
        )
    }
}
