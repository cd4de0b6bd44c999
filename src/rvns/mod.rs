//! Randomized Variable Neighborhood Search (RVNS).
//!
//! A single-solution metaheuristic that escapes local optima by
//! shaking the incumbent at systematically growing distances. A random
//! precedence-valid neighbor is drawn from the current neighborhood; if
//! it is no better, the neighborhood expands, up to `max_I` (by
//! convention `n - 1`, spanning the whole search space). Acceptance
//! resets to the smallest neighborhood. Each candidate can optionally
//! be refined by an embedded [Tabu Search](crate::tabu) before the
//! acceptance test.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;
mod shake;

pub use config::RvnsConfig;
pub use runner::RvnsSearch;
pub use shake::shake_by_swap;
