//! Simulation layer - world state, tick orchestration and the run driver

pub mod output;
pub mod runner;
pub mod tick;
pub mod world;

pub use output::{DecisionRecord, RunOutput, RunStats, TickSnapshot};
pub use runner::{resolve_tick_count, Simulation, StepResult, DEFAULT_TICKS};
pub use tick::{run_tick, TickReport};
pub use world::World;
