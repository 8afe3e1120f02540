//! Ivy Recognizer - interval-graph recognition
//!
//! Decides whether a graph admits an interval representation: each
//! vertex assigned a real interval such that two vertices are adjacent
//! iff their intervals overlap. The decision follows the
//! Fulkerson–Gross characterization: a graph is interval iff it is
//! chordal and its maximal cliques admit an arrangement in which every
//! vertex's cliques occupy consecutive positions.
//!
//! The pipeline runs five stages in a fixed order: adjacency index,
//! Lex-BFS elimination order, perfect-elimination check, clique
//! derivation over the elimination forest, and the arrangement search
//! over the clique-intersection graph. Every stage is deterministic;
//! repeated runs on the same graph produce identical artifacts.
//!
//! # Example
//!
//! ```
//! use ivy_graph::Graph;
//! use ivy_recognizer::IntervalRecognizer;
//!
//! let mut graph = Graph::new();
//! for v in 1..=4 {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//! graph.add_edge(3, 4);
//!
//! assert!(IntervalRecognizer::new().is_interval_graph(&graph));
//! ```

mod arrangement;
mod chordality;
mod clique_tree;
mod events;
mod lexbfs;
mod recognizer;

pub use arrangement::{find_consecutive_arrangement, is_consecutive_arrangement};
pub use chordality::is_perfect_elimination_order;
pub use clique_tree::{maximal_cliques, Clique};
pub use events::{Observer, RecognizerEvent};
pub use lexbfs::elimination_order;
pub use recognizer::{Analysis, IntervalRecognizer};
