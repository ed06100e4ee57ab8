//! Simulation configuration with documented constants
//!
//! Every tunable number the tick pipeline and the decision engine use lives
//! here. `SimulationConfig::default()` reproduces the reference economy; a
//! TOML file may override any subset of keys.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ai::scoring::ScoreWeights;
use crate::core::error::{EconError, Result};

/// Configuration for the whole simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub pricing: PricingConfig,
    pub consumption: ConsumptionConfig,
    pub decision: DecisionConfig,
    pub start: StartingConditions,
}

/// Price adjustment rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Fraction of the gap to the flow-implied price closed each tick
    ///
    /// At 0.1 a price needs roughly 22 ticks to cover 90% of a persistent
    /// gap, which keeps oscillation damped.
    pub adjust_rate: f64,

    /// Lower bound applied to supply before dividing demand by it
    pub supply_epsilon: f64,

    /// No price may ever drop below this
    pub price_floor: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            adjust_rate: 0.1,
            supply_epsilon: 1e-3,
            price_floor: 0.01,
        }
    }
}

/// Population purchasing rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionConfig {
    /// Divisor used for affordability when a price is not strictly positive
    ///
    /// Deliberately separate from `PricingConfig::supply_epsilon`.
    pub zero_price_fallback: f64,
}

impl Default for ConsumptionConfig {
    fn default() -> Self {
        Self {
            zero_price_fallback: 1.0,
        }
    }
}

/// Decision engine tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    pub weights: ScoreWeights,

    /// Best candidates scoring below this are not acted upon
    pub min_score_threshold: f64,

    /// Job signal for a BUILD candidate
    pub build_jobs: f64,

    /// Job signal for an EXPAND candidate
    pub expand_jobs: f64,

    /// Share of an archetype's construction cost charged for one EXPAND
    pub expand_cost_fraction: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            min_score_threshold: 10.0,
            build_jobs: 200.0,
            expand_jobs: 150.0,
            expand_cost_fraction: 0.5,
        }
    }
}

/// Initial world state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingConditions {
    pub treasury: f64,
    pub weekly_tax_income: f64,
    /// Supply and demand every good starts with
    pub initial_stock: f64,
    pub population_size: u32,
    pub wage: f64,
}

impl Default for StartingConditions {
    fn default() -> Self {
        Self {
            treasury: 100_000.0,
            weekly_tax_income: 5_000.0,
            initial_stock: 1_000.0,
            population_size: 10_000,
            wage: 2.0,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    ///
    /// Comparisons are written so that NaN fails them.
    pub fn validate(&self) -> Result<()> {
        let p = &self.pricing;
        if !(p.adjust_rate > 0.0 && p.adjust_rate <= 1.0) {
            return Err(EconError::InvalidConfig(format!(
                "pricing.adjust_rate ({}) must be in (0, 1]",
                p.adjust_rate
            )));
        }
        require_positive("pricing.supply_epsilon", p.supply_epsilon)?;
        require_positive("pricing.price_floor", p.price_floor)?;
        require_positive(
            "consumption.zero_price_fallback",
            self.consumption.zero_price_fallback,
        )?;

        let d = &self.decision;
        if !d.weights.as_array().iter().all(|w| *w >= 0.0 && w.is_finite()) {
            return Err(EconError::InvalidConfig(
                "decision.weights must be finite and not negative".into(),
            ));
        }
        require_finite("decision.min_score_threshold", d.min_score_threshold)?;
        require_finite("decision.build_jobs", d.build_jobs)?;
        require_finite("decision.expand_jobs", d.expand_jobs)?;
        require_non_negative("decision.expand_cost_fraction", d.expand_cost_fraction)?;

        let s = &self.start;
        require_finite("start.treasury", s.treasury)?;
        require_finite("start.weekly_tax_income", s.weekly_tax_income)?;
        require_non_negative("start.initial_stock", s.initial_stock)?;
        // A negative wage gives a negative budget and negative purchases
        require_non_negative("start.wage", s.wage)?;

        Ok(())
    }
}

fn require_finite(key: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EconError::InvalidConfig(format!(
            "{} ({}) must be finite",
            key, value
        )));
    }
    Ok(())
}

fn require_positive(key: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(EconError::InvalidConfig(format!(
            "{} ({}) must be positive",
            key, value
        )));
    }
    Ok(())
}

fn require_non_negative(key: &str, value: f64) -> Result<()> {
    if !(value >= 0.0 && value.is_finite()) {
        return Err(EconError::InvalidConfig(format!(
            "{} ({}) must not be negative",
            key, value
        )));
    }
    Ok(())
}
