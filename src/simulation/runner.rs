//! Simulation driver - tick, then decide, `n` times

use std::ops::ControlFlow;

use crate::ai::engine::{ai_tick, AiTurn};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::simulation::output::{DecisionRecord, RunOutput, RunStats, TickSnapshot};
use crate::simulation::tick::{run_tick, TickReport};
use crate::simulation::world::World;

/// Tick count used when none is given or the given one is not positive
pub const DEFAULT_TICKS: u64 = 20;

/// Resolve a user-supplied tick count
pub fn resolve_tick_count(requested: Option<i64>) -> u64 {
    match requested {
        Some(n) if n > 0 => n as u64,
        _ => DEFAULT_TICKS,
    }
}

/// One completed tick-then-decide step
#[derive(Debug, Clone)]
pub struct StepResult {
    pub report: TickReport,
    pub snapshot: TickSnapshot,
    pub decision: DecisionRecord,
    pub turn: AiTurn,
}

/// Owns the world and the configuration it runs under
#[derive(Debug, Clone)]
pub struct Simulation {
    pub world: World,
    pub config: SimulationConfig,
}

impl Simulation {
    /// Build the reference world from the config's starting conditions
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let world = World::from_start(&config.start)?;
        Ok(Self { world, config })
    }

    pub fn with_world(world: World, config: SimulationConfig) -> Self {
        Self { world, config }
    }

    /// Run one tick, snapshot it, then let the decision engine act
    pub fn step(&mut self) -> StepResult {
        let report = run_tick(&mut self.world, &self.config);
        let snapshot = TickSnapshot::capture(&self.world);
        let turn = ai_tick(&mut self.world, &self.config.decision);
        let decision = DecisionRecord::new(&self.world, turn.best.as_ref(), &turn.outcome);

        StepResult {
            report,
            snapshot,
            decision,
            turn,
        }
    }

    /// Hand each step to `observe` without retaining it
    ///
    /// Stops after `n_ticks` steps or as soon as `observe` breaks. Returns
    /// the tallies of the steps that ran.
    pub fn stream<F>(&mut self, n_ticks: u64, mut observe: F) -> RunStats
    where
        F: FnMut(StepResult) -> ControlFlow<()>,
    {
        let mut stats = RunStats::default();
        while stats.ticks < n_ticks {
            let step = self.step();
            stats.record(&step.decision);
            if observe(step).is_break() {
                break;
            }
        }
        stats
    }

    /// Run exactly `n_ticks` tick-then-decide steps, keeping every snapshot
    pub fn run(&mut self, n_ticks: u64) -> RunOutput {
        self.run_with(n_ticks, |_| ControlFlow::Continue(()))
    }

    /// Like `run`, calling `observe` after every step
    pub fn run_with<F>(&mut self, n_ticks: u64, mut observe: F) -> RunOutput
    where
        F: FnMut(&StepResult) -> ControlFlow<()>,
    {
        let mut snapshots = Vec::new();
        let mut decisions = Vec::new();

        let stats = self.stream(n_ticks, |step| {
            let flow = observe(&step);
            snapshots.push(step.snapshot);
            decisions.push(step.decision);
            flow
        });

        RunOutput {
            ticks: stats.ticks,
            snapshots,
            decisions,
            final_world: self.world.clone(),
        }
    }
}
