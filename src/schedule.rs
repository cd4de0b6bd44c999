//! Schedules: immutable permutation values over job ids.

use std::ops::Index;

use crate::precedence::PrecedenceGraph;

/// Identifies a job. Job ids are positive and contiguous: `1..=n`.
///
/// Attribute arrays are indexed by `id - 1`.
pub type JobId = usize;

/// An ordered processing sequence: a permutation of the job ids `1..=n`.
///
/// Schedules are value objects. Every proposed move builds a new
/// `Schedule` (see [`Schedule::swapped`]); search engines rebind their
/// current schedule only on acceptance, so a schedule handed out in a
/// checkpoint can never be mutated behind the consumer's back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule(Vec<JobId>);

impl Schedule {
    /// Wraps an ordered job sequence.
    pub fn new(jobs: Vec<JobId>) -> Self {
        Schedule(jobs)
    }

    /// Number of positions (equals the number of jobs).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-job schedule.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The job ids in processing order.
    pub fn jobs(&self) -> &[JobId] {
        &self.0
    }

    /// Returns a new schedule with the jobs at positions `i` and `j`
    /// exchanged.
    pub fn swapped(&self, i: usize, j: usize) -> Schedule {
        let mut jobs = self.0.clone();
        jobs.swap(i, j);
        Schedule(jobs)
    }

    /// True iff the sequence contains every id in `1..=n` exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.0.len();
        let mut seen = vec![false; n];
        self.0.iter().all(|&job| {
            (1..=n).contains(&job) && !std::mem::replace(&mut seen[job - 1], true)
        })
    }

    /// True iff no job is scheduled after a job it must precede.
    ///
    /// This is the full pairwise characterization: for every pair of
    /// positions `i < j`, the job at `j` does not precede the job at `i`.
    pub fn respects(&self, graph: &PrecedenceGraph) -> bool {
        let n = self.0.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if graph.precedes(self.0[j], self.0[i]) {
                    return false;
                }
            }
        }
        true
    }
}

impl From<Vec<JobId>> for Schedule {
    fn from(jobs: Vec<JobId>) -> Self {
        Schedule::new(jobs)
    }
}

impl Index<usize> for Schedule {
    type Output = JobId;

    fn index(&self, position: usize) -> &JobId {
        &self.0[position]
    }
}
