//! Graph value types.
//!
//! A `Graph` is the flat form a host hands to the recognizer: a list of
//! vertex ids, a list of edges, and a directedness flag. The recognizer
//! has no concept of edge direction; the flag is kept so fixtures from
//! directed hosts round-trip unchanged.

use serde::{Deserialize, Serialize};

/// Unique identifier for a vertex within a graph.
pub type VertexId = i64;

/// An edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub target: VertexId,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// True when the edge connects a vertex to itself.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// A graph as supplied by a host: vertices, edges, and a directedness
/// flag that adjacency construction always collapses to undirected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub vertices: Vec<VertexId>,

    pub edges: Vec<Edge>,

    /// Ignored for adjacency purposes; every edge is mutual.
    #[serde(default)]
    pub directed: bool,
}

impl Graph {
    /// Creates an empty undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex.
    pub fn add_vertex(&mut self, id: VertexId) {
        self.vertices.push(id);
    }

    /// Adds an edge between two vertices.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) {
        self.edges.push(Edge::new(source, target));
    }

    /// Returns the number of declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of declared edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the first vertex id declared more than once, if any.
    pub fn duplicate_vertex(&self) -> Option<VertexId> {
        let mut seen = std::collections::BTreeSet::new();
        self.vertices.iter().find(|&&v| !seen.insert(v)).copied()
    }
}
