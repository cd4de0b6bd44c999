//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the caller's initial schedule (`current = best`).
//! 2. At each iteration, scan adjacent positions cyclically from the
//!    position after the last performed swap.
//! 3. Take the first admissible swap: one that yields a new global best
//!    (aspiration), or whose degradation stays under `gamma` and whose
//!    job pair is not on the tabu list. Swaps that would invert a
//!    required precedence are never considered.
//! 4. Record the swapped pair on the tabu list (oldest evicted at
//!    capacity `L`), checkpoint on strict best improvement.
//! 5. Stop after the iteration budget `K`, or as soon as a full scan
//!    finds no admissible swap.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use log::{debug, trace};

use super::config::TabuConfig;
use super::types::TabuList;
use crate::error::InvariantViolation;
use crate::instance::Instance;
use crate::precedence::PrecedenceGraph;
use crate::schedule::Schedule;
use crate::search::{validate_inputs, Checkpoint, SearchEngine, SearchOutcome};

/// Deterministic adjacent-swap Tabu Search.
///
/// The scan order is fully determined by the inputs: no randomness is
/// involved, so two runs on the same inputs produce the same outcome.
#[derive(Debug, Clone)]
pub struct TabuSearch {
    config: TabuConfig,
}

impl TabuSearch {
    /// Creates an engine with the given configuration.
    pub fn new(config: TabuConfig) -> Self {
        TabuSearch { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }
}

impl SearchEngine for TabuSearch {
    fn search(
        &self,
        initial: &Schedule,
        instance: &Instance,
        graph: &PrecedenceGraph,
    ) -> Result<SearchOutcome, InvariantViolation> {
        let n = validate_inputs(initial, instance)?;
        let budget = self.config.max_iterations;
        let gamma = self.config.gamma;

        let mut current = initial.clone();
        let mut current_cost = instance.total_weighted_tardiness(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut tabu_list = TabuList::new(self.config.tabu_len);
        let mut checkpoints = Vec::new();
        let mut last_swap_index = 0;
        let mut k = 0;

        // With fewer than two jobs there is no adjacent pair to swap.
        'search: while k <= budget && n >= 2 {
            debug!("k={} current_cost={} best_cost={}", k, current_cost, best_cost);
            trace!(
                "current={:?} best={:?} tabu={:?}",
                current, best, tabu_list
            );

            let mut i = last_swap_index;
            loop {
                let front = current[i];
                let back = current[i + 1];
                // The swap reorders only this pair; it is invalid exactly
                // when `front` is required to come before `back`.
                if !graph.precedes(front, back) {
                    let candidate = current.swapped(i, i + 1);
                    let candidate_cost = instance.total_weighted_tardiness(&candidate);
                    let delta = current_cost - candidate_cost;
                    let aspiration = candidate_cost < best_cost;
                    if aspiration || (delta > -gamma && !tabu_list.contains(front, back)) {
                        tabu_list.push(front, back);
                        if candidate_cost < best_cost {
                            best = candidate.clone();
                            best_cost = candidate_cost;
                            checkpoints.push(Checkpoint {
                                schedule: best.clone(),
                                cost: best_cost,
                                iteration: k,
                                neighborhood: None,
                            });
                            debug!("improved best to {} (k={})", best_cost, k);
                        }
                        current = candidate;
                        current_cost = candidate_cost;
                        last_swap_index = (i + 1) % (n - 1);
                        k += 1;
                        continue 'search;
                    }
                }
                i = (i + 1) % (n - 1);
                if i == last_swap_index {
                    // Full scan without an admissible swap: exhausted.
                    debug!("no admissible swap left, terminating at k={}", k);
                    break 'search;
                }
            }
        }

        checkpoints.push(Checkpoint {
            schedule: best.clone(),
            cost: best_cost,
            iteration: budget,
            neighborhood: None,
        });
        Ok(SearchOutcome {
            schedule: best,
            cost: best_cost,
            checkpoints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_instance_a() -> Instance {
        Instance::new(
            vec![10.0, 10.0, 13.0, 4.0],
            vec![4.0, 2.0, 1.0, 12.0],
            vec![14.0, 12.0, 1.0, 12.0],
        )
        .unwrap()
    }

    fn sheet_instance_b() -> Instance {
        Instance::new(
            vec![16.0, 11.0, 4.0, 8.0],
            vec![1.0, 2.0, 7.0, 9.0],
            vec![3.0, 4.0, 5.0, 7.0],
        )
        .unwrap()
    }

    #[test]
    fn test_sheet_a_best_schedule() {
        let engine = TabuSearch::new(
            TabuConfig::default()
                .with_max_iterations(3)
                .with_tabu_len(2)
                .with_gamma(100.0),
        );
        let outcome = engine
            .search(
                &Schedule::new(vec![2, 1, 4, 3]),
                &sheet_instance_a(),
                &PrecedenceGraph::new(),
            )
            .unwrap();

        assert_eq!(outcome.schedule, Schedule::new(vec![1, 4, 2, 3]));
        assert_eq!(outcome.cost, 408.0);
        assert_eq!(
            outcome.checkpoints,
            vec![
                Checkpoint {
                    schedule: Schedule::new(vec![1, 2, 4, 3]),
                    cost: 480.0,
                    iteration: 0,
                    neighborhood: None,
                },
                Checkpoint {
                    schedule: Schedule::new(vec![1, 4, 2, 3]),
                    cost: 408.0,
                    iteration: 1,
                    neighborhood: None,
                },
                Checkpoint {
                    schedule: Schedule::new(vec![1, 4, 2, 3]),
                    cost: 408.0,
                    iteration: 3,
                    neighborhood: None,
                },
            ]
        );
    }

    #[test]
    fn test_sheet_b_best_schedule() {
        let engine = TabuSearch::new(
            TabuConfig::default()
                .with_max_iterations(4)
                .with_tabu_len(2)
                .with_gamma(20.0),
        );
        let outcome = engine
            .search(
                &Schedule::new(vec![4, 2, 1, 3]),
                &sheet_instance_b(),
                &PrecedenceGraph::new(),
            )
            .unwrap();

        assert_eq!(outcome.schedule, Schedule::new(vec![3, 4, 2, 1]));
        assert_eq!(outcome.cost, 219.0);
        let trail: Vec<(f64, usize)> = outcome
            .checkpoints
            .iter()
            .map(|c| (c.cost, c.iteration))
            .collect();
        assert_eq!(
            trail,
            vec![(262.0, 0), (223.0, 1), (219.0, 2), (219.0, 4)]
        );
    }

    #[test]
    fn test_checkpoint_costs_never_increase() {
        let instance = sheet_instance_b();
        let initial = Schedule::new(vec![4, 2, 1, 3]);
        let initial_cost = instance.total_weighted_tardiness(&initial);
        let engine = TabuSearch::new(
            TabuConfig::default()
                .with_max_iterations(50)
                .with_tabu_len(2)
                .with_gamma(20.0),
        );
        let outcome = engine
            .search(&initial, &instance, &PrecedenceGraph::new())
            .unwrap();

        assert!(outcome.cost <= initial_cost);
        for pair in outcome.checkpoints.windows(2) {
            assert!(pair[1].cost <= pair[0].cost);
        }
        assert!(outcome.checkpoints.iter().all(|c| c.cost <= initial_cost));
    }

    #[test]
    fn test_terminates_when_only_swap_is_forbidden() {
        let graph = PrecedenceGraph::from_edges([(1, 2)]).unwrap();
        let instance = Instance::new(vec![5.0, 1.0], vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
        let engine = TabuSearch::new(TabuConfig::default().with_max_iterations(10));
        let outcome = engine
            .search(&Schedule::new(vec![1, 2]), &instance, &graph)
            .unwrap();

        // The single adjacent swap would invert 1 -> 2, so the search
        // exhausts immediately; only the terminal checkpoint remains.
        assert_eq!(outcome.schedule, Schedule::new(vec![1, 2]));
        assert_eq!(outcome.cost, 11.0);
        assert_eq!(
            outcome.checkpoints,
            vec![Checkpoint {
                schedule: Schedule::new(vec![1, 2]),
                cost: 11.0,
                iteration: 10,
                neighborhood: None,
            }]
        );
    }

    #[test]
    fn test_precedence_chain_is_never_violated() {
        let graph = PrecedenceGraph::from_edges([(1, 2), (2, 3)]).unwrap();
        let initial = Schedule::new(vec![1, 2, 4, 3]);
        assert!(initial.respects(&graph));

        let engine = TabuSearch::new(
            TabuConfig::default()
                .with_max_iterations(5)
                .with_tabu_len(2)
                .with_gamma(100.0),
        );
        let outcome = engine
            .search(&initial, &sheet_instance_a(), &graph)
            .unwrap();

        assert_eq!(outcome.schedule, Schedule::new(vec![1, 4, 2, 3]));
        assert_eq!(outcome.cost, 408.0);
        assert!(outcome.schedule.respects(&graph));
        assert!(outcome.checkpoints.iter().all(|c| c.schedule.respects(&graph)));
    }

    #[test]
    fn test_single_job_schedule_is_returned_as_is() {
        let instance = Instance::new(vec![3.0], vec![1.0], vec![2.0]).unwrap();
        let engine = TabuSearch::new(TabuConfig::default().with_max_iterations(7));
        let outcome = engine
            .search(&Schedule::new(vec![1]), &instance, &PrecedenceGraph::new())
            .unwrap();

        assert_eq!(outcome.schedule, Schedule::new(vec![1]));
        assert_eq!(outcome.cost, 4.0);
        assert_eq!(outcome.checkpoints.len(), 1);
        assert_eq!(outcome.checkpoints[0].iteration, 7);
    }

    #[test]
    fn test_entry_validation() {
        let instance = sheet_instance_a();
        let engine = TabuSearch::new(TabuConfig::default());
        assert_eq!(
            engine.search(&Schedule::new(vec![1, 2, 3]), &instance, &PrecedenceGraph::new()),
            Err(InvariantViolation::ScheduleLength { schedule: 3, jobs: 4 })
        );
        assert_eq!(
            engine.search(
                &Schedule::new(vec![1, 2, 2, 4]),
                &instance,
                &PrecedenceGraph::new()
            ),
            Err(InvariantViolation::NotAPermutation)
        );
    }
}
