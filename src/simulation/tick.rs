//! Tick orchestrator
//!
//! One tick runs the phases in a fixed order:
//! reset -> production -> consumption -> pricing -> budget.
//! Production refills the shared supply pool before consumers draw on it,
//! and pricing reads the tick's final flows. The ledger does not read prices.

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::Tick;
use crate::economy::budget::{settle, LedgerEntry};
use crate::economy::consumption::run_consumption;
use crate::economy::production::{run_production, ProductionResult};
use crate::market::pricing::adjust_prices;
use crate::simulation::world::World;

/// What happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: Tick,
    pub production: Vec<ProductionResult>,
    /// Money spent by all population segments
    pub consumer_spending: f64,
    pub ledger: LedgerEntry,
}

/// Run a single tick over the world
pub fn run_tick(world: &mut World, config: &SimulationConfig) -> TickReport {
    world.current_tick += 1;

    world.market.reset();
    let production = run_production(&world.facilities, &mut world.market);
    let consumer_spending = run_consumption(&world.pops, &mut world.market, &config.consumption);
    adjust_prices(&mut world.market, &config.pricing);
    let ledger = settle(&mut world.treasury, world.weekly_tax_income, &world.facilities);

    tracing::debug!(
        tick = world.current_tick,
        treasury = ledger.balance,
        maintenance = ledger.maintenance,
        producing = production.len(),
        "tick settled"
    );

    TickReport {
        tick: world.current_tick,
        production,
        consumer_spending,
        ledger,
    }
}
