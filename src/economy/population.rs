//! Population segments - consumers with a wage budget

use serde::{Deserialize, Serialize};

use crate::core::types::SegmentId;
use crate::economy::archetype::GoodAmount;
use crate::market::Good;

/// A block of identical consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopSegment {
    pub id: SegmentId,
    pub size: u32,
    pub wage: f64,
    /// Per-capita wants; earlier entries are bought first
    pub consumption: Vec<GoodAmount>,
}

impl PopSegment {
    pub fn new(id: SegmentId, size: u32, wage: f64) -> Self {
        Self {
            id,
            size,
            wage,
            consumption: Vec::new(),
        }
    }

    /// Append a per-capita want at the lowest priority
    pub fn with_want(mut self, good: Good, per_capita: f64) -> Self {
        self.consumption.push(GoodAmount::new(good, per_capita));
        self
    }

    /// Spending money available each tick
    pub fn budget(&self) -> f64 {
        self.size as f64 * self.wage
    }

    /// Default workforce: grain first, then clothing
    pub fn workers(id: SegmentId, size: u32, wage: f64) -> Self {
        Self::new(id, size, wage)
            .with_want(Good::Grain, 0.2)
            .with_want(Good::Clothing, 0.05)
    }
}
