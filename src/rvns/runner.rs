//! RVNS execution engine.
//!
//! # Algorithm
//!
//! 1. For each outer iteration `k = 0..K`:
//!    a. **Shaking**: draw a random precedence-valid neighbor at
//!       distance `i`, starting with `i = 1`.
//!    b. Optionally refine the candidate with an embedded Tabu Search.
//!    c. **Move or not**: accept on strict improvement and reset to the
//!       smallest neighborhood; otherwise grow `i`, giving up on this
//!       iteration once `i` exceeds `max_I`.
//! 2. Return the incumbent after exactly `K` iterations.
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::RvnsConfig;
use super::shake::shake_by_swap;
use crate::error::InvariantViolation;
use crate::instance::Instance;
use crate::precedence::PrecedenceGraph;
use crate::schedule::Schedule;
use crate::search::{validate_inputs, Checkpoint, SearchEngine, SearchOutcome};
use crate::tabu::{TabuConfig, TabuSearch};

/// Randomized Variable Neighborhood Search.
///
/// The engine owns its randomness: every `search` call reseeds a fresh
/// generator from the configured seed, so runs are reproducible and the
/// engine is safe to use alongside others (no process-wide state).
#[derive(Debug, Clone)]
pub struct RvnsSearch {
    config: RvnsConfig,
}

impl RvnsSearch {
    /// Creates an engine with the given configuration.
    pub fn new(config: RvnsConfig) -> Self {
        RvnsSearch { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &RvnsConfig {
        &self.config
    }
}

impl SearchEngine for RvnsSearch {
    fn search(
        &self,
        initial: &Schedule,
        instance: &Instance,
        graph: &PrecedenceGraph,
    ) -> Result<SearchOutcome, InvariantViolation> {
        let n = validate_inputs(initial, instance)?;
        let budget = self.config.max_iterations;
        let max_i = self
            .config
            .max_neighborhood
            .unwrap_or_else(|| n.saturating_sub(1));
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);

        let mut current = initial.clone();
        let mut current_cost = instance.total_weighted_tardiness(&current);
        let mut checkpoints = Vec::new();

        for k in 0..budget {
            debug!("k={} current_cost={}", k, current_cost);
            trace!("current={:?}", current);

            for i in 1..=max_i {
                let mut candidate = shake_by_swap(&current, i, graph, &mut rng);
                let mut candidate_cost = instance.total_weighted_tardiness(&candidate);
                if self.config.refinement {
                    let refiner = TabuSearch::new(
                        TabuConfig::default()
                            .with_max_iterations(i)
                            .with_tabu_len(max_i)
                            .with_gamma(0.0),
                    );
                    let refined = refiner.search(&candidate, instance, graph)?;
                    candidate = refined.schedule;
                    candidate_cost = refined.cost;
                }
                if candidate_cost < current_cost {
                    current = candidate;
                    current_cost = candidate_cost;
                    checkpoints.push(Checkpoint {
                        schedule: current.clone(),
                        cost: current_cost,
                        iteration: k,
                        neighborhood: Some(i),
                    });
                    debug!("accepted {} in neighborhood {} (k={})", current_cost, i, k);
                    break;
                }
            }
        }

        checkpoints.push(Checkpoint {
            schedule: current.clone(),
            cost: current_cost,
            iteration: budget,
            neighborhood: None,
        });
        Ok(SearchOutcome {
            schedule: current,
            cost: current_cost,
            checkpoints,
        })
    }
}
