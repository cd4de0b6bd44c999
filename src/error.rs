//! Error types.
//!
//! The crate is fail-fast at its boundaries: malformed precedence data is
//! rejected at edge insertion, malformed search inputs at `search` entry.
//! In steady state the engines only ever propose pre-validated moves, so
//! no error can occur mid-search.

use std::error::Error;
use std::fmt;

use crate::schedule::JobId;

/// Returned when inserting a precedence edge would close a cycle.
///
/// The insertion is aborted as a whole; the graph is observably unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleError {
    /// The job that was to precede [`CycleError::child`].
    pub parent: JobId,
    /// The job that was to follow [`CycleError::parent`].
    pub child: JobId,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "edge {} -> {} would make the precedence graph cyclic",
            self.parent, self.child
        )
    }
}

impl Error for CycleError {}

/// Fatal input error detected before any search iteration runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The three job-attribute arrays disagree in length.
    AttributeLengths {
        /// Length of the processing-time array.
        processing_times: usize,
        /// Length of the due-date array.
        due_dates: usize,
        /// Length of the weight array.
        weights: usize,
    },
    /// The initial schedule and the instance disagree on the job count.
    ScheduleLength {
        /// Number of positions in the schedule.
        schedule: usize,
        /// Number of jobs in the instance.
        jobs: usize,
    },
    /// The initial schedule is not a permutation of `1..=n`.
    NotAPermutation,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::AttributeLengths {
                processing_times,
                due_dates,
                weights,
            } => write!(
                f,
                "attribute arrays disagree in length: {} processing times, {} due dates, {} weights",
                processing_times, due_dates, weights
            ),
            InvariantViolation::ScheduleLength { schedule, jobs } => write!(
                f,
                "schedule has {} positions but the instance has {} jobs",
                schedule, jobs
            ),
            InvariantViolation::NotAPermutation => {
                write!(f, "schedule is not a permutation of 1..=n")
            }
        }
    }
}

impl Error for InvariantViolation {}
