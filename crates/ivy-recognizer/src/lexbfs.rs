//! Lexicographic breadth-first ordering.
//!
//! Each unvisited vertex carries a label: the sequence of visit steps
//! at which one of its neighbors was taken, most recent first. At every
//! step the unvisited vertex with the lexicographically greatest label
//! is taken next; equal labels are broken by smallest vertex id. The
//! tie-break is part of the contract. Selection never depends on
//! container iteration order.
//!
//! The returned sequence is the *elimination order*: the reverse of the
//! visit sequence. For a chordal graph the reverse of a Lex-BFS visit
//! sequence is a perfect elimination ordering; the visit sequence
//! itself is not a PEO candidate.

use ivy_graph::{AdjacencyIndex, VertexId};
use std::collections::BTreeMap;
use tracing::trace;

/// Computes the candidate perfect elimination ordering of the graph.
///
/// Produces a permutation of all declared vertices. Deterministic:
/// equal inputs yield equal orders.
pub fn elimination_order(adjacency: &AdjacencyIndex) -> Vec<VertexId> {
    let mut labels: BTreeMap<VertexId, Vec<usize>> =
        adjacency.vertices().map(|v| (v, Vec::new())).collect();
    let mut visit = Vec::with_capacity(labels.len());

    while let Some(next) = select_next(&labels) {
        let step = visit.len();
        trace!("lexbfs step {}: visiting {}", step, next);
        labels.remove(&next);
        for &u in adjacency.neighbors(next) {
            if let Some(label) = labels.get_mut(&u) {
                label.insert(0, step);
            }
        }
        visit.push(next);
    }

    visit.reverse();
    visit
}

/// Picks the unvisited vertex with the greatest label, smallest id on
/// ties. `Vec<usize>` ordering is lexicographic with a strict prefix
/// comparing smaller, exactly the label ordering required here.
fn select_next(labels: &BTreeMap<VertexId, Vec<usize>>) -> Option<VertexId> {
    let mut best: Option<(VertexId, &Vec<usize>)> = None;
    for (&v, label) in labels {
        match best {
            Some((_, best_label)) if label <= best_label => {}
            _ => best = Some((v, label)),
        }
    }
    best.map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivy_graph::Graph;

    fn adjacency(vertices: &[VertexId], edges: &[(VertexId, VertexId)]) -> AdjacencyIndex {
        let mut g = Graph::new();
        for &v in vertices {
            g.add_vertex(v);
        }
        for &(s, t) in edges {
            g.add_edge(s, t);
        }
        AdjacencyIndex::build(&g)
    }

    #[test]
    fn test_empty_graph() {
        let adj = adjacency(&[], &[]);
        assert!(elimination_order(&adj).is_empty());
    }

    #[test]
    fn test_is_permutation() {
        let adj = adjacency(&[4, 2, 7, 1], &[(4, 2), (2, 7)]);
        let mut order = elimination_order(&adj);
        assert_eq!(order.len(), 4);
        order.sort();
        assert_eq!(order, vec![1, 2, 4, 7]);
    }

    #[test]
    fn test_path_order() {
        // Visit starts at 1 (all labels empty, smallest id) and walks
        // the path; the elimination order is the reverse.
        let adj = adjacency(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
        assert_eq!(elimination_order(&adj), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_tie_break_smallest_id() {
        // Complete graph: every step is a tie, so the visit order is
        // ascending by id and the elimination order descending.
        let adj = adjacency(&[3, 1, 2], &[(1, 2), (2, 3), (1, 3)]);
        assert_eq!(elimination_order(&adj), vec![3, 2, 1]);
    }

    #[test]
    fn test_deterministic() {
        let adj = adjacency(&[5, 3, 9, 1, 7], &[(5, 3), (3, 9), (9, 1), (1, 7), (5, 9)]);
        assert_eq!(elimination_order(&adj), elimination_order(&adj));
    }
}
