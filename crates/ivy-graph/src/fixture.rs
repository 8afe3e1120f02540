//! JSON fixture loading.
//!
//! Hosts and tests describe graphs as JSON documents:
//!
//! ```json
//! {
//!     "directed": false,
//!     "vertices": [1, 2, 3],
//!     "edges": [{ "source": 1, "target": 2 }]
//! }
//! ```
//!
//! The `directed` flag defaults to false when absent. Duplicate vertex
//! declarations are rejected here, before recognition starts, so the
//! core never sees a malformed graph.

use crate::model::{Graph, VertexId};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture declares vertex {0} more than once")]
    DuplicateVertex(VertexId),
}

/// Loads a graph from a JSON fixture file.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph, FixtureError> {
    let text = fs::read_to_string(path.as_ref())?;
    let graph = parse_graph(&text)?;
    debug!(
        "loaded fixture {} ({} vertices, {} edges)",
        path.as_ref().display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses a graph from a JSON string.
pub fn parse_graph(json: &str) -> Result<Graph, FixtureError> {
    let graph: Graph = serde_json::from_str(json)?;
    if let Some(id) = graph.duplicate_vertex() {
        return Err(FixtureError::DuplicateVertex(id));
    }
    Ok(graph)
}
