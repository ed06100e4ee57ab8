//! Facility archetypes - the static templates BUILD instantiates
//!
//! Each archetype carries its recipe, maintenance fee and construction cost
//! as plain data. Adding an archetype means adding a variant and its data.

use serde::{Deserialize, Serialize};

use crate::market::Good;

/// An amount of one good, per level per tick for recipes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoodAmount {
    pub good: Good,
    pub amount: f64,
}

impl GoodAmount {
    pub const fn new(good: Good, amount: f64) -> Self {
        Self { good, amount }
    }
}

/// Type of facility that can be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    SteelMill,
    TextileMill,
}

/// Static data describing an archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blueprint {
    pub label: &'static str,
    pub productivity: f64,
    pub inputs: &'static [GoodAmount],
    pub outputs: &'static [GoodAmount],
    /// Per level, per tick
    pub maintenance_cost: f64,
    pub construction_cost: f64,
    /// Flat stand-in profit the decision engine assumes for one EXPAND
    pub expand_profit: f64,
}

static STEEL_MILL: Blueprint = Blueprint {
    label: "Steel Mill",
    productivity: 1.0,
    inputs: &[GoodAmount::new(Good::Coal, 2.0), GoodAmount::new(Good::Iron, 3.0)],
    outputs: &[GoodAmount::new(Good::Steel, 4.0)],
    maintenance_cost: 500.0,
    construction_cost: 5000.0,
    expand_profit: 500.0,
};

static TEXTILE_MILL: Blueprint = Blueprint {
    label: "Textile Mill",
    productivity: 1.0,
    inputs: &[GoodAmount::new(Good::Grain, 2.0)],
    outputs: &[GoodAmount::new(Good::Clothing, 3.0)],
    maintenance_cost: 200.0,
    construction_cost: 3000.0,
    expand_profit: 500.0,
};

impl Archetype {
    /// Every archetype in BUILD evaluation order
    pub const ALL: [Archetype; 2] = [Archetype::SteelMill, Archetype::TextileMill];

    pub fn blueprint(self) -> &'static Blueprint {
        match self {
            Archetype::SteelMill => &STEEL_MILL,
            Archetype::TextileMill => &TEXTILE_MILL,
        }
    }

    pub fn label(self) -> &'static str {
        self.blueprint().label
    }

    pub fn construction_cost(self) -> f64 {
        self.blueprint().construction_cost
    }

    /// First listed output; drives strategic importance and shortage scoring
    pub fn primary_output(self) -> Option<GoodAmount> {
        self.blueprint().outputs.first().copied()
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
