//! Symmetric neighbor lookup.
//!
//! The AdjacencyIndex is built once from a graph's edge list and read
//! everywhere downstream. Ordered containers are used throughout so
//! every traversal the recognizer performs is reproducible; no decision
//! in the pipeline may depend on hash iteration order.

use crate::model::{Graph, VertexId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

static EMPTY: BTreeSet<VertexId> = BTreeSet::new();

/// Mapping from each declared vertex to its set of neighbors.
///
/// Invariants: symmetric (`u ∈ adj[v] ⇔ v ∈ adj[u]`), no self-loops,
/// keys are exactly the declared vertices and neighbor sets contain
/// only declared vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
    neighbors: BTreeMap<VertexId, BTreeSet<VertexId>>,
}

impl AdjacencyIndex {
    /// Builds the index from a graph's vertex and edge lists.
    ///
    /// Every edge is treated as mutual regardless of the graph's
    /// `directed` flag. Self-loops are dropped and duplicate edges are
    /// absorbed by set semantics. An edge endpoint that is not a
    /// declared vertex is skipped with a warning; lookups on such ids
    /// fall back to the empty set.
    pub fn build(graph: &Graph) -> Self {
        let mut neighbors: BTreeMap<VertexId, BTreeSet<VertexId>> = graph
            .vertices
            .iter()
            .map(|&v| (v, BTreeSet::new()))
            .collect();

        for edge in &graph.edges {
            if edge.is_loop() {
                continue;
            }
            if !neighbors.contains_key(&edge.source) || !neighbors.contains_key(&edge.target) {
                warn!("edge {} references an undeclared vertex, skipping", edge);
                continue;
            }
            if let Some(set) = neighbors.get_mut(&edge.source) {
                set.insert(edge.target);
            }
            if let Some(set) = neighbors.get_mut(&edge.target) {
                set.insert(edge.source);
            }
        }

        Self { neighbors }
    }

    /// Returns the neighbor set of `v`, or the empty set for unknown ids.
    pub fn neighbors(&self, v: VertexId) -> &BTreeSet<VertexId> {
        self.neighbors.get(&v).unwrap_or(&EMPTY)
    }

    /// True when `u` and `v` are adjacent.
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Returns the degree of `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).len()
    }

    /// Iterates over the declared vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.neighbors.keys().copied()
    }

    /// Returns the number of declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
