//! Economy layer - facilities, production, population and the budget ledger

pub mod archetype;
pub mod budget;
pub mod consumption;
pub mod facility;
pub mod population;
pub mod production;

pub use archetype::{Archetype, Blueprint, GoodAmount};
pub use budget::{settle, total_maintenance, LedgerEntry};
pub use consumption::run_consumption;
pub use facility::Facility;
pub use population::PopSegment;
pub use production::{run_production, ProductionResult};
