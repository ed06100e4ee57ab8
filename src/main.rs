//! Econ Sim - Entry Point
//!
//! Runs the reference economy for a number of ticks, printing the world state
//! and the AI's decision after each one.

use std::ops::ControlFlow;
use std::path::PathBuf;

use clap::Parser;
use econ_sim::core::config::SimulationConfig;
use econ_sim::core::error::Result;
use econ_sim::simulation::{resolve_tick_count, Simulation, StepResult};
use tracing_subscriber::EnvFilter;

const RULE: &str = "-----------------------------------------";

/// Economic AI simulator
#[derive(Parser, Debug)]
#[command(name = "econ-sim")]
#[command(about = "Run the market economy and its build/expand AI for a number of ticks")]
struct Args {
    /// Number of ticks to simulate (absent or <= 0 means 20)
    #[arg(long, short = 't', allow_negative_numbers = true)]
    ticks: Option<i64>,

    /// TOML file overriding simulation constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write snapshots and decision records as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("econ_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let ticks = resolve_tick_count(args.ticks);

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            SimulationConfig::load_from_toml(path)?
        }
        None => SimulationConfig::default(),
    };

    let mut sim = Simulation::new(config).inspect_err(|e| {
        tracing::error!("Failed to initialize world: {}", e);
    })?;

    println!("=== Economic AI Simulator ===");
    println!("Running for {} ticks.", ticks);
    println!("{}", RULE);

    match &args.json {
        Some(path) => {
            let output = sim.run_with(ticks, |step| {
                print_step(step);
                ControlFlow::Continue(())
            });
            println!("{}", output.summary());
            std::fs::write(path, output.to_json()?)?;
            println!("Full output written to {}", path.display());
        }
        None => {
            let stats = sim.stream(ticks, |step| {
                print_step(&step);
                ControlFlow::Continue(())
            });
            println!("{}", stats.summary(&sim.world));
        }
    }

    Ok(())
}

fn print_step(step: &StepResult) {
    println!("{}", step.snapshot);
    println!("{}", step.decision);
    println!("{}", RULE);
}
