//! Transitively closed precedence relation over job ids.
//!
//! The graph records direct "must precede" edges and maintains the full
//! transitive closure incrementally, so `precedes` is a set lookup rather
//! than a traversal. Once built from instance data the graph is read-only
//! and may be shared across concurrent searches.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::error::CycleError;
use crate::schedule::JobId;

/// A directed acyclic "must occur before" relation, transitively closed.
///
/// Adding an edge that would close a cycle fails with [`CycleError`] and
/// leaves the graph unchanged. After every successful insertion the
/// closure is complete: `precedes(a, b) && precedes(b, c)` implies
/// `precedes(a, c)`.
#[derive(Debug, Clone, Default)]
pub struct PrecedenceGraph {
    /// For each job, the set of jobs that must come before it.
    ancestors: HashMap<JobId, HashSet<JobId>>,
    /// For each job, the set of jobs that must come after it.
    descendants: HashMap<JobId, HashSet<JobId>>,
    /// Direct edges in insertion order.
    edges: Vec<(JobId, JobId)>,
    nodes: BTreeSet<JobId>,
}

impl PrecedenceGraph {
    /// An empty relation (every schedule is valid under it).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from direct edges, in order.
    ///
    /// The first edge that would close a cycle aborts construction.
    pub fn from_edges(
        edges: impl IntoIterator<Item = (JobId, JobId)>,
    ) -> Result<Self, CycleError> {
        let mut graph = Self::new();
        for (parent, child) in edges {
            graph.add_edge(parent, child)?;
        }
        Ok(graph)
    }

    /// Records that `parent` must precede `child` and propagates the
    /// transitive closure to a fixed point.
    ///
    /// Since the relation is already closed before the call, the edge
    /// closes a cycle exactly when `child` is known to precede `parent`
    /// (or the edge is a self-loop); in that case nothing is modified.
    pub fn add_edge(&mut self, parent: JobId, child: JobId) -> Result<(), CycleError> {
        if parent == child || self.precedes(child, parent) {
            return Err(CycleError { parent, child });
        }

        self.nodes.insert(parent);
        self.nodes.insert(child);
        self.edges.push((parent, child));

        // Worklist fixed point instead of per-pair recursion: each new
        // pair (p, c) pulls in p's ancestors and c's descendants until
        // the closure stabilizes.
        let mut pending = VecDeque::new();
        pending.push_back((parent, child));
        while let Some((p, c)) = pending.pop_front() {
            if !self.ancestors.entry(c).or_default().insert(p) {
                continue;
            }
            self.descendants.entry(p).or_default().insert(c);
            if let Some(grandparents) = self.ancestors.get(&p) {
                for &gp in grandparents {
                    pending.push_back((gp, c));
                }
            }
            if let Some(grandchildren) = self.descendants.get(&c) {
                for &gc in grandchildren {
                    pending.push_back((p, gc));
                }
            }
        }
        Ok(())
    }

    /// True iff `a` must occur before `b`, directly or transitively.
    pub fn precedes(&self, a: JobId, b: JobId) -> bool {
        self.ancestors.get(&b).is_some_and(|set| set.contains(&a))
    }

    /// Jobs mentioned by at least one edge, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = JobId> + '_ {
        self.nodes.iter().copied()
    }

    /// Direct edges in insertion order (closure pairs are not listed).
    pub fn edges(&self) -> &[(JobId, JobId)] {
        &self.edges
    }
}
