//! The search capability shared by both engines.
//!
//! Engine selection is composition, not branching: callers hold a value
//! implementing [`SearchEngine`], either a
//! [`TabuSearch`](crate::tabu::TabuSearch) or an
//! [`RvnsSearch`](crate::rvns::RvnsSearch) (optionally embedding a Tabu
//! refinement step).

use crate::error::InvariantViolation;
use crate::instance::Instance;
use crate::precedence::PrecedenceGraph;
use crate::schedule::Schedule;

/// One entry of the improvement log.
///
/// Engines append a checkpoint at every strict improvement and one
/// unconditional terminal entry at exit (tagged with the iteration
/// budget `K`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkpoint {
    /// The schedule at the time of recording.
    pub schedule: Schedule,
    /// Its total weighted tardiness.
    pub cost: f64,
    /// Outer iteration counter at the time of recording.
    pub iteration: usize,
    /// Neighborhood index at acceptance. `Some(i)` only for RVNS
    /// improvement entries; `None` for Tabu entries and for the
    /// terminal entry of either engine.
    pub neighborhood: Option<usize>,
}

/// Final result of a search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Best (Tabu) or final incumbent (RVNS) schedule.
    pub schedule: Schedule,
    /// Cost of [`SearchOutcome::schedule`].
    pub cost: f64,
    /// Ordered improvement log, terminal entry included.
    pub checkpoints: Vec<Checkpoint>,
}

/// A sequencing metaheuristic.
///
/// `initial` must be a permutation of `1..=n` matching the instance's
/// job count; both are checked at entry. Precedence validity of the
/// initial schedule is assumed by contract and not enforced. The graph
/// is only read, so it may back any number of concurrent searches.
pub trait SearchEngine {
    /// Runs the search to its iteration budget and returns the outcome.
    fn search(
        &self,
        initial: &Schedule,
        instance: &Instance,
        graph: &PrecedenceGraph,
    ) -> Result<SearchOutcome, InvariantViolation>;
}

/// Entry validation shared by the engines. Returns the job count.
pub(crate) fn validate_inputs(
    initial: &Schedule,
    instance: &Instance,
) -> Result<usize, InvariantViolation> {
    let jobs = instance.n_jobs();
    if initial.len() != jobs {
        return Err(InvariantViolation::ScheduleLength {
            schedule: initial.len(),
            jobs,
        });
    }
    if !initial.is_permutation() {
        return Err(InvariantViolation::NotAPermutation);
    }
    Ok(jobs)
}
