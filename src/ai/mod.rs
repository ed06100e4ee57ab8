//! Economic AI - scores build/expand candidates and commits the best one

pub mod decision;
pub mod engine;
pub mod scoring;

pub use decision::{Action, Candidate, Decision, DecisionOutcome};
pub use engine::{ai_tick, commit, decide, evaluate_candidates, select_best, AiTurn};
pub use scoring::{ScoreBreakdown, ScoreWeights};
