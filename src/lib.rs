//! Single-machine job sequencing under precedence constraints.
//!
//! Minimizes total weighted tardiness over permutation schedules with
//! two local-search metaheuristics:
//!
//! - **Tabu Search (TS)**: deterministic adjacent-swap exploration with
//!   a bounded tabu list, a gamma degradation threshold and an
//!   aspiration override.
//! - **RVNS**: randomized variable neighborhood search that shakes the
//!   incumbent at increasing distance, optionally refining each shaken
//!   candidate with an embedded Tabu Search.
//!
//! Both engines consume the same inputs (an initial permutation
//! schedule, per-job attribute arrays in an [`instance::Instance`] and
//! a transitively closed precedence DAG, the
//! [`precedence::PrecedenceGraph`]) and implement the shared
//! [`search::SearchEngine`] capability, returning the best schedule,
//! its cost and a checkpoint log of every strict improvement.
//!
//! Loading instance files, rendering the precedence graph and CLI
//! plumbing are left to consumers; this crate is the search core only.
//!
//! # Example
//!
//! ```
//! use tardiness_search::instance::Instance;
//! use tardiness_search::precedence::PrecedenceGraph;
//! use tardiness_search::schedule::Schedule;
//! use tardiness_search::search::SearchEngine;
//! use tardiness_search::tabu::{TabuConfig, TabuSearch};
//!
//! let instance = Instance::new(
//!     vec![10.0, 10.0, 13.0, 4.0], // processing times
//!     vec![4.0, 2.0, 1.0, 12.0],   // due dates
//!     vec![14.0, 12.0, 1.0, 12.0], // weights
//! )?;
//! let graph = PrecedenceGraph::new();
//! let engine = TabuSearch::new(
//!     TabuConfig::default()
//!         .with_max_iterations(3)
//!         .with_tabu_len(2)
//!         .with_gamma(100.0),
//! );
//!
//! let outcome = engine.search(&Schedule::new(vec![2, 1, 4, 3]), &instance, &graph)?;
//! assert_eq!(outcome.schedule.jobs(), &[1, 4, 2, 3]);
//! assert_eq!(outcome.cost, 408.0);
//! # Ok::<(), tardiness_search::error::InvariantViolation>(())
//! ```

pub mod error;
pub mod instance;
pub mod precedence;
pub mod rvns;
pub mod schedule;
pub mod search;
pub mod tabu;
