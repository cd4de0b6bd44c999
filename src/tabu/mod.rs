//! Tabu Search (TS).
//!
//! A deterministic single-solution trajectory metaheuristic exploring
//! adjacent-swap moves. Short-term memory (the tabu list) forbids
//! recently reversed swaps, preventing cycling; the aspiration criterion
//! overrides the list whenever a move yields a new global best. The scan
//! over adjacent positions is cyclic and resumes after the last
//! performed swap, so every pair is revisited fairly.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::TabuSearch;
pub use types::TabuList;
