//! Per-tick snapshots, decision records and run output

use serde::{Deserialize, Serialize};

use crate::ai::decision::{Action, Candidate, DecisionOutcome};
use crate::core::types::Tick;
use crate::market::Good;
use crate::simulation::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub good: Good,
    pub price: f64,
}

/// Read-only view of the world after a tick settles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub tick: Tick,
    pub treasury: f64,
    /// Catalog order
    pub prices: Vec<PriceQuote>,
}

impl TickSnapshot {
    pub fn capture(world: &World) -> Self {
        Self {
            tick: world.current_tick,
            treasury: world.treasury,
            prices: world
                .market
                .iter()
                .map(|(good, entry)| PriceQuote {
                    good,
                    price: entry.price,
                })
                .collect(),
        }
    }

    pub fn price(&self, good: Good) -> Option<f64> {
        self.prices.iter().find(|q| q.good == good).map(|q| q.price)
    }
}

impl std::fmt::Display for TickSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tick {}", self.tick)?;
        writeln!(f, "Treasury: {:.2}", self.treasury)?;
        write!(f, "Prices:")?;
        for quote in &self.prices {
            write!(f, " {}={:.2}", quote.good, quote.price)?;
        }
        Ok(())
    }
}

/// Why a candidate scored the way it did
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionReason {
    pub shortage_reduction: f64,
    pub job_creation: f64,
    /// Construction efficiency factor (profit / cost)
    pub roi: f64,
}

/// Serializable account of one decision-engine turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub tick: Tick,
    /// "build", "expand" or "none"
    #[serde(rename = "type")]
    pub kind: String,
    /// Archetype label for build, facility label for expand
    pub target: Option<String>,
    /// `None` when there was no candidate at all
    pub score: Option<f64>,
    pub projected_profit: f64,
    /// Level the target reached, for a committed expand
    pub new_level: Option<u32>,
    pub committed: bool,
    pub outcome: String,
    pub reason: DecisionReason,
}

impl DecisionRecord {
    pub fn new(
        world: &World,
        best: Option<&Candidate>,
        outcome: &DecisionOutcome,
    ) -> Self {
        let (kind, target) = match best.map(|c| c.action) {
            Some(Action::Build(archetype)) => ("build", Some(archetype.label().to_string())),
            Some(Action::Expand(idx)) => (
                "expand",
                world.facilities.get(idx).map(|f| f.label.clone()),
            ),
            None => ("none", None),
        };

        let reason = best
            .map(|c| DecisionReason {
                shortage_reduction: c.breakdown.shortage_reduction,
                job_creation: c.breakdown.jobs,
                roi: c.breakdown.efficiency,
            })
            .unwrap_or_default();

        Self {
            tick: world.current_tick,
            kind: kind.to_string(),
            target,
            score: best.map(|c| c.score),
            projected_profit: best.map(|c| c.breakdown.profit).unwrap_or(0.0),
            new_level: match outcome {
                DecisionOutcome::Expanded { new_level, .. } => Some(*new_level),
                _ => None,
            },
            committed: outcome.is_committed(),
            outcome: outcome_label(outcome).to_string(),
            reason,
        }
    }
}

fn outcome_label(outcome: &DecisionOutcome) -> &'static str {
    match outcome {
        DecisionOutcome::NoAction { .. } => "below_threshold",
        DecisionOutcome::Built { .. } => "built",
        DecisionOutcome::Expanded { .. } => "expanded",
        DecisionOutcome::Unaffordable { .. } => "unaffordable",
        DecisionOutcome::TargetMissing { .. } => "target_missing",
        DecisionOutcome::AllocationFailed { .. } => "allocation_failed",
    }
}

impl std::fmt::Display for DecisionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let score = self
            .score
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "n/a".to_string());
        match (&self.target, self.committed) {
            (Some(target), true) => {
                write!(f, "[AI] {}: {}", self.kind.to_uppercase(), target)?;
                if let Some(level) = self.new_level {
                    write!(f, " to level {}", level)?;
                }
                write!(f, " (score={})", score)
            }
            (Some(target), false) if self.outcome == "allocation_failed" => write!(
                f,
                "[AI] Failed to allocate new building: {} (score={})",
                target, score
            ),
            (Some(target), false) => write!(
                f,
                "[AI] No action: best was {} {} ({}, score={})",
                self.kind, target, self.outcome, score
            ),
            (None, _) => write!(f, "[AI] No action taken this tick (best score = {})", score),
        }
    }
}

/// Running tallies of a run, kept without retaining its records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub ticks: u64,
    pub builds: u64,
    pub expands: u64,
}

impl RunStats {
    /// Count one completed step
    pub fn record(&mut self, decision: &DecisionRecord) {
        self.ticks += 1;
        if decision.committed {
            match decision.kind.as_str() {
                "build" => self.builds += 1,
                "expand" => self.expands += 1,
                _ => {}
            }
        }
    }

    pub fn summary(&self, world: &World) -> String {
        format!(
            "Simulated {} ticks\n{} builds, {} expansions, {} facilities, treasury {:.2}",
            self.ticks,
            self.builds,
            self.expands,
            world.facilities.len(),
            world.treasury,
        )
    }
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    pub ticks: u64,
    pub snapshots: Vec<TickSnapshot>,
    pub decisions: Vec<DecisionRecord>,
    pub final_world: World,
}

impl RunOutput {
    pub fn to_json(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn stats(&self) -> RunStats {
        let mut stats = RunStats::default();
        for decision in &self.decisions {
            stats.record(decision);
        }
        stats
    }

    pub fn summary(&self) -> String {
        self.stats().summary(&self.final_world)
    }
}
