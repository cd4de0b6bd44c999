//! Tabu-list bookkeeping.

use std::collections::VecDeque;

use crate::schedule::JobId;

/// Bounded recency memory of recently performed adjacent swaps.
///
/// Holds at most `capacity` unordered job-id pairs in insertion order;
/// pushing onto a full list evicts the oldest entry (ring-buffer
/// semantics). Membership is order-insensitive: `(a, b)` and `(b, a)`
/// are the same move.
#[derive(Debug, Clone)]
pub struct TabuList {
    entries: VecDeque<(JobId, JobId)>,
    capacity: usize,
}

impl TabuList {
    /// An empty list holding at most `capacity` pairs.
    pub fn new(capacity: usize) -> Self {
        TabuList {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a performed swap, evicting the oldest entry when full.
    ///
    /// A zero-capacity list stays empty (no move is ever forbidden).
    pub fn push(&mut self, a: JobId, b: JobId) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(Self::normalized(a, b));
    }

    /// True iff the unordered pair is currently forbidden.
    pub fn contains(&self, a: JobId, b: JobId) -> bool {
        // Linear scan: the list never holds more than L pairs.
        self.entries.contains(&Self::normalized(a, b))
    }

    /// Number of pairs currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff no pair is held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn normalized(a: JobId, b: JobId) -> (JobId, JobId) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
