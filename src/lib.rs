//! Econ Sim - discrete-tick market economy with a heuristic build/expand AI

pub mod ai;
pub mod core;
pub mod economy;
pub mod market;
pub mod simulation;
