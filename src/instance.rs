//! Problem instances and the weighted-tardiness cost evaluator.

use crate::error::InvariantViolation;
use crate::schedule::Schedule;

/// Per-job attributes of a single-machine sequencing instance.
///
/// The three arrays are parallel and indexed by `id - 1`. They are
/// immutable after construction and may be shared read-only across
/// concurrent search runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    processing_times: Vec<f64>,
    due_dates: Vec<f64>,
    weights: Vec<f64>,
}

impl Instance {
    /// Builds an instance from parallel attribute arrays.
    ///
    /// Fails with [`InvariantViolation::AttributeLengths`] when the
    /// arrays disagree in length.
    pub fn new(
        processing_times: Vec<f64>,
        due_dates: Vec<f64>,
        weights: Vec<f64>,
    ) -> Result<Self, InvariantViolation> {
        if processing_times.len() != due_dates.len() || due_dates.len() != weights.len() {
            return Err(InvariantViolation::AttributeLengths {
                processing_times: processing_times.len(),
                due_dates: due_dates.len(),
                weights: weights.len(),
            });
        }
        Ok(Instance {
            processing_times,
            due_dates,
            weights,
        })
    }

    /// Number of jobs.
    pub fn n_jobs(&self) -> usize {
        self.processing_times.len()
    }

    /// Processing times, indexed by `id - 1`.
    pub fn processing_times(&self) -> &[f64] {
        &self.processing_times
    }

    /// Due dates, indexed by `id - 1`.
    pub fn due_dates(&self) -> &[f64] {
        &self.due_dates
    }

    /// Tardiness weights, indexed by `id - 1`.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Total weighted tardiness of `schedule` on a single machine.
    ///
    /// Jobs are processed back to back starting at time zero; each job
    /// contributes `max(0, completion - due_date) * weight`. Pure and
    /// O(n); the caller is responsible for `schedule` addressing valid
    /// job ids (guaranteed once the entry validation of a search has
    /// passed).
    pub fn total_weighted_tardiness(&self, schedule: &Schedule) -> f64 {
        let mut completion = 0.0;
        let mut tardiness = 0.0;
        for &id in schedule.jobs() {
            let job = id - 1;
            completion += self.processing_times[job];
            tardiness += (completion - self.due_dates[job]).max(0.0) * self.weights[job];
        }
        tardiness
    }
}
