//! The interval-graph recognizer.
//!
//! Composes the five pipeline stages: adjacency, Lex-BFS ordering,
//! chordality check, clique derivation, arrangement search. Data flows
//! strictly forward and the whole computation is pure: same graph in,
//! same verdict and same intermediate artifacts out.

use crate::arrangement::find_consecutive_arrangement;
use crate::chordality::is_perfect_elimination_order;
use crate::clique_tree::{maximal_cliques, Clique};
use crate::events::{Observer, RecognizerEvent};
use crate::lexbfs::elimination_order;
use ivy_graph::{AdjacencyIndex, Graph, GraphProperty, VertexId};
use serde::Serialize;
use tracing::debug;

/// Everything a recognition run produced.
///
/// `interval` is the final verdict; the remaining fields expose the
/// intermediate artifacts for hosts, the CLI, and tests. When the graph
/// is not chordal the pipeline stops early and `cliques` stays empty.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// True iff the graph is an interval graph.
    pub interval: bool,
    /// True iff the graph is chordal.
    pub chordal: bool,
    /// The candidate perfect elimination ordering.
    pub elimination_order: Vec<VertexId>,
    /// Maximal cliques, empty when the graph is not chordal.
    pub cliques: Vec<Clique>,
    /// Clique indices in arrangement order, when one exists.
    pub arrangement: Option<Vec<usize>>,
}

/// Decides whether a graph is an interval graph.
#[derive(Debug, Default)]
pub struct IntervalRecognizer;

impl IntervalRecognizer {
    /// Creates a recognizer.
    pub fn new() -> Self {
        Self
    }

    /// Returns true iff `graph` is an interval graph.
    pub fn is_interval_graph(&self, graph: &Graph) -> bool {
        self.analyze(graph).interval
    }

    /// Runs the full pipeline and returns all intermediate artifacts.
    pub fn analyze(&self, graph: &Graph) -> Analysis {
        self.analyze_with(graph, &mut |_| {})
    }

    /// Runs the full pipeline, reporting each stage to `observer`.
    pub fn analyze_with(&self, graph: &Graph, observer: &mut Observer<'_>) -> Analysis {
        if graph.vertices.is_empty() {
            debug!("empty graph is vacuously interval");
            return Analysis {
                interval: true,
                chordal: true,
                elimination_order: Vec::new(),
                cliques: Vec::new(),
                arrangement: Some(Vec::new()),
            };
        }

        let adjacency = AdjacencyIndex::build(graph);
        observer(&RecognizerEvent::AdjacencyBuilt {
            vertices: adjacency.vertex_count(),
        });

        let order = elimination_order(&adjacency);
        debug!("elimination order: {:?}", order);
        observer(&RecognizerEvent::OrderComputed { order: &order });

        let chordal = is_perfect_elimination_order(&order, &adjacency);
        observer(&RecognizerEvent::ChordalityChecked { chordal });
        if !chordal {
            debug!("graph is not chordal");
            return Analysis {
                interval: false,
                chordal: false,
                elimination_order: order,
                cliques: Vec::new(),
                arrangement: None,
            };
        }

        let cliques = maximal_cliques(&order, &adjacency);
        debug!("{} maximal cliques", cliques.len());
        observer(&RecognizerEvent::CliquesComputed { cliques: &cliques });

        let arrangement = find_consecutive_arrangement(&cliques);
        observer(&RecognizerEvent::ArrangementSearched {
            arrangement: arrangement.as_deref(),
        });

        Analysis {
            interval: arrangement.is_some(),
            chordal: true,
            elimination_order: order,
            cliques,
            arrangement,
        }
    }
}

impl GraphProperty for IntervalRecognizer {
    fn name(&self) -> &'static str {
        "interval-graph"
    }

    fn check(&self, graph: &Graph) -> bool {
        self.is_interval_graph(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(vertices: &[VertexId], edges: &[(VertexId, VertexId)]) -> Graph {
        let mut g = Graph::new();
        for &v in vertices {
            g.add_vertex(v);
        }
        for &(s, t) in edges {
            g.add_edge(s, t);
        }
        g
    }

    #[test]
    fn test_empty_graph_is_interval() {
        let recognizer = IntervalRecognizer::new();
        let analysis = recognizer.analyze(&Graph::new());
        assert!(analysis.interval);
        assert!(analysis.chordal);
        assert_eq!(analysis.arrangement, Some(vec![]));
    }

    #[test]
    fn test_non_chordal_stops_early() {
        let recognizer = IntervalRecognizer::new();
        let analysis = recognizer.analyze(&graph(
            &[1, 2, 3, 4],
            &[(1, 2), (2, 3), (3, 4), (4, 1)],
        ));
        assert!(!analysis.interval);
        assert!(!analysis.chordal);
        assert!(analysis.cliques.is_empty());
        assert_eq!(analysis.arrangement, None);
    }

    #[test]
    fn test_observer_sees_pipeline_order() {
        let recognizer = IntervalRecognizer::new();
        let mut stages = Vec::new();
        recognizer.analyze_with(&graph(&[1, 2, 3], &[(1, 2), (2, 3)]), &mut |event| {
            stages.push(match event {
                RecognizerEvent::AdjacencyBuilt { .. } => "adjacency",
                RecognizerEvent::OrderComputed { .. } => "order",
                RecognizerEvent::ChordalityChecked { .. } => "chordality",
                RecognizerEvent::CliquesComputed { .. } => "cliques",
                RecognizerEvent::ArrangementSearched { .. } => "arrangement",
            });
        });
        assert_eq!(
            stages,
            vec!["adjacency", "order", "chordality", "cliques", "arrangement"]
        );
    }

    #[test]
    fn test_property_boundary() {
        let recognizer = IntervalRecognizer::new();
        assert_eq!(recognizer.name(), "interval-graph");
        assert!(recognizer.check(&graph(&[1, 2], &[(1, 2)])));
    }

    #[test]
    fn test_analysis_serializes() {
        let analysis = IntervalRecognizer::new().analyze(&graph(&[1, 2], &[(1, 2)]));
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["interval"], true);
        assert_eq!(json["cliques"][0], serde_json::json!([1, 2]));
        assert_eq!(json["arrangement"], serde_json::json!([0]));
    }

    #[test]
    fn test_directed_flag_ignored() {
        let mut g = graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
        g.directed = true;
        let recognizer = IntervalRecognizer::new();
        assert!(recognizer.is_interval_graph(&g));
    }
}
