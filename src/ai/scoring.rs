//! Candidate scoring
//!
//! score = profit * w.profit + jobs * w.jobs + strategic * w.strategic
//!       + shortage_reduction * w.shortage + efficiency * w.construction_efficiency

use serde::{Deserialize, Serialize};

use crate::core::config::DecisionConfig;
use crate::economy::archetype::{Archetype, GoodAmount};
use crate::economy::facility::Facility;
use crate::market::Market;

/// Weights for the scoring factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub profit: f64,
    pub jobs: f64,
    pub strategic: f64,
    pub shortage: f64,
    pub construction_efficiency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            profit: 1.0,
            jobs: 0.01,
            strategic: 5.0,
            shortage: 0.5,
            construction_efficiency: 10.0,
        }
    }
}

impl ScoreWeights {
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.profit,
            self.jobs,
            self.strategic,
            self.shortage,
            self.construction_efficiency,
        ]
    }
}

/// Raw factor values for one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub profit: f64,
    pub jobs: f64,
    pub strategic: f64,
    pub shortage_reduction: f64,
    pub efficiency: f64,
}

impl ScoreBreakdown {
    pub fn score(&self, weights: &ScoreWeights) -> f64 {
        weights.profit * self.profit
            + weights.jobs * self.jobs
            + weights.strategic * self.strategic
            + weights.shortage * self.shortage_reduction
            + weights.construction_efficiency * self.efficiency
    }
}

/// Level-1 output revenue minus input cost and maintenance at current prices
pub fn projected_build_profit(archetype: Archetype, market: &Market) -> f64 {
    let blueprint = archetype.blueprint();
    let revenue: f64 = blueprint
        .outputs
        .iter()
        .map(|o| o.amount * market.price(o.good))
        .sum();
    let input_cost: f64 = blueprint
        .inputs
        .iter()
        .map(|i| i.amount * market.price(i.good))
        .sum();
    revenue - input_cost - blueprint.maintenance_cost
}

/// How much of the output good's current deficit `extra` supply would close
///
/// Each side is floored at zero separately, so a good already in surplus
/// scores 0.
pub fn shortage_reduction(market: &Market, extra: Option<GoodAmount>) -> f64 {
    let Some(extra) = extra else {
        return 0.0;
    };
    let entry = market.entry(extra.good);
    let before = (entry.demand - entry.supply).max(0.0);
    let after = (entry.demand - (entry.supply + extra.amount)).max(0.0);
    before - after
}

/// Profit per unit of capital, 0 when nothing is spent
pub fn construction_efficiency(profit: f64, cost: f64) -> f64 {
    if cost <= 0.0 {
        return 0.0;
    }
    profit / cost
}

/// Importance of the archetype's primary output good
pub fn strategic_importance(archetype: Archetype) -> f64 {
    archetype
        .primary_output()
        .map(|o| o.good.strategic_importance())
        .unwrap_or(1.0)
}

/// Factors for building a new level-1 facility of `archetype`
pub fn score_build(archetype: Archetype, market: &Market, config: &DecisionConfig) -> ScoreBreakdown {
    let profit = projected_build_profit(archetype, market);
    ScoreBreakdown {
        profit,
        jobs: config.build_jobs,
        strategic: strategic_importance(archetype),
        shortage_reduction: shortage_reduction(market, archetype.primary_output()),
        efficiency: construction_efficiency(profit, archetype.construction_cost()),
    }
}

/// Cost of raising `facility` by one level
pub fn expand_cost(facility: &Facility, config: &DecisionConfig) -> f64 {
    facility.archetype.construction_cost() * config.expand_cost_fraction
}

/// Factors for expanding an existing facility by one level
///
/// Profit is the archetype's flat stand-in, not a projection from the
/// facility's recipe.
pub fn score_expand(facility: &Facility, market: &Market, config: &DecisionConfig) -> ScoreBreakdown {
    let archetype = facility.archetype;
    let profit = archetype.blueprint().expand_profit;
    ScoreBreakdown {
        profit,
        jobs: config.expand_jobs,
        strategic: strategic_importance(archetype),
        shortage_reduction: shortage_reduction(market, archetype.primary_output()),
        efficiency: construction_efficiency(profit, expand_cost(facility, config)),
    }
}
