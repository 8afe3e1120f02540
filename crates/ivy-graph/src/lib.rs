//! Ivy Graph - graph model and fixture loading
//!
//! This crate defines the graph value the recognizer consumes: flat
//! vertex/edge collections with integer ids, the symmetric adjacency
//! index derived from them, and the JSON fixture loader used by hosts
//! and tests.
//!
//! # Example
//!
//! ```
//! use ivy_graph::{AdjacencyIndex, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_vertex(1);
//! graph.add_vertex(2);
//! graph.add_edge(1, 2);
//!
//! let adjacency = AdjacencyIndex::build(&graph);
//! assert!(adjacency.are_adjacent(1, 2));
//! ```

mod adjacency;
mod fixture;
mod model;
mod property;

pub use adjacency::AdjacencyIndex;
pub use fixture::{load_graph, parse_graph, FixtureError};
pub use model::{Edge, Graph, VertexId};
pub use property::GraphProperty;
