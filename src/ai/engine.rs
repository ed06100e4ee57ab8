//! Decision engine - enumerate, score, select, commit
//!
//! BUILD candidates (one per archetype) are evaluated before EXPAND
//! candidates (one per facility). The highest score wins and ties keep the
//! earliest candidate, so a BUILD beats an EXPAND with the same score.

use crate::ai::decision::{Action, Candidate, Decision, DecisionOutcome};
use crate::ai::scoring::{expand_cost, score_build, score_expand};
use crate::core::config::DecisionConfig;
use crate::core::error::{EconError, Result};
use crate::economy::archetype::Archetype;
use crate::simulation::world::World;

/// Result of one decision-engine turn
#[derive(Debug, Clone, PartialEq)]
pub struct AiTurn {
    pub decision: Decision,
    /// Highest-scoring candidate, even if it was not acted on
    pub best: Option<Candidate>,
    pub outcome: DecisionOutcome,
}

/// Score every candidate in evaluation order
pub fn evaluate_candidates(world: &World, config: &DecisionConfig) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(Archetype::ALL.len() + world.facilities.len());

    for archetype in Archetype::ALL {
        let breakdown = score_build(archetype, &world.market, config);
        candidates.push(Candidate {
            action: Action::Build(archetype),
            cost: archetype.construction_cost(),
            score: breakdown.score(&config.weights),
            breakdown,
        });
    }

    for (i, facility) in world.facilities.iter().enumerate() {
        let breakdown = score_expand(facility, &world.market, config);
        candidates.push(Candidate {
            action: Action::Expand(i),
            cost: expand_cost(facility, config),
            score: breakdown.score(&config.weights),
            breakdown,
        });
    }

    candidates
}

/// Highest score, first encountered on ties
pub fn select_best(candidates: &[Candidate]) -> Option<&Candidate> {
    let mut best: Option<&Candidate> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Apply the threshold to the best candidate
pub fn decide(best: Option<&Candidate>, config: &DecisionConfig) -> Decision {
    match best {
        Some(candidate) if candidate.score >= config.min_score_threshold => Decision {
            action: Some(candidate.action),
            score: candidate.score,
        },
        Some(candidate) => Decision::none(candidate.score),
        None => Decision::none(f64::NEG_INFINITY),
    }
}

/// Carry out a decision if the treasury allows it
///
/// Affordability shortfalls and missing EXPAND targets leave the world
/// untouched and come back as outcomes, not errors. An allocation failure
/// while adding a facility is an error and also leaves the world untouched.
pub fn commit(world: &mut World, decision: &Decision, config: &DecisionConfig) -> Result<DecisionOutcome> {
    let score = decision.score;
    let Some(action) = decision.action else {
        return Ok(DecisionOutcome::NoAction { best_score: score });
    };

    match action {
        Action::Build(archetype) => {
            let cost = archetype.construction_cost();
            if world.treasury < cost {
                return Ok(DecisionOutcome::Unaffordable {
                    action,
                    cost,
                    treasury: world.treasury,
                    score,
                });
            }
            let facility_idx = world.spawn_facility(archetype)?;
            world.treasury -= cost;
            Ok(DecisionOutcome::Built {
                facility_idx,
                archetype,
                cost,
                score,
            })
        }
        Action::Expand(facility_idx) => {
            let Some(facility) = world.facilities.get(facility_idx) else {
                return Ok(DecisionOutcome::TargetMissing {
                    facility_idx,
                    score,
                });
            };
            let cost = expand_cost(facility, config);
            if world.treasury < cost {
                return Ok(DecisionOutcome::Unaffordable {
                    action,
                    cost,
                    treasury: world.treasury,
                    score,
                });
            }
            let facility = &mut world.facilities[facility_idx];
            facility.level += 1;
            let new_level = facility.level;
            world.treasury -= cost;
            Ok(DecisionOutcome::Expanded {
                facility_idx,
                new_level,
                cost,
                score,
            })
        }
    }
}

/// One decision-engine turn over the settled post-tick world
///
/// A failed commit is reported as `DecisionOutcome::AllocationFailed` with
/// the chosen candidate kept, and the world is left as it was.
pub fn ai_tick(world: &mut World, config: &DecisionConfig) -> AiTurn {
    let candidates = evaluate_candidates(world, config);
    let best = select_best(&candidates).cloned();
    let decision = decide(best.as_ref(), config);

    let outcome = commit(world, &decision, config)
        .unwrap_or_else(|e| failed_outcome(&decision, best.as_ref(), &e));
    log_outcome(world, &outcome);

    AiTurn {
        decision,
        best,
        outcome,
    }
}

fn failed_outcome(decision: &Decision, best: Option<&Candidate>, error: &EconError) -> DecisionOutcome {
    match (decision.action, best) {
        (Some(action), Some(candidate)) => DecisionOutcome::AllocationFailed {
            action,
            cost: candidate.cost,
            score: decision.score,
            reason: error.to_string(),
        },
        _ => DecisionOutcome::NoAction {
            best_score: decision.score,
        },
    }
}

fn log_outcome(world: &World, outcome: &DecisionOutcome) {
    match outcome {
        DecisionOutcome::NoAction { best_score } => {
            tracing::debug!(best_score, "no action");
        }
        DecisionOutcome::Built {
            archetype, score, ..
        } => {
            tracing::debug!(%archetype, score, "built");
        }
        DecisionOutcome::Expanded {
            facility_idx,
            new_level,
            score,
            ..
        } => {
            let label = world
                .facilities
                .get(*facility_idx)
                .map(|f| f.label.as_str())
                .unwrap_or("?");
            tracing::debug!(facility = label, new_level, score, "expanded");
        }
        DecisionOutcome::Unaffordable {
            cost,
            treasury,
            score,
            ..
        } => {
            tracing::debug!(cost, treasury, score, "unaffordable");
        }
        DecisionOutcome::TargetMissing {
            facility_idx,
            score,
        } => {
            tracing::warn!(
                "EXPAND target {} does not exist, ignoring (score={:.2})",
                facility_idx,
                score
            );
        }
        DecisionOutcome::AllocationFailed { action, reason, .. } => {
            tracing::warn!("Decision {:?} abandoned: {}", action, reason);
        }
    }
}
