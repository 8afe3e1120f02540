//! Maximal cliques via the elimination forest.
//!
//! For a perfect elimination ordering, `{v} ∪ right_neighbors(v)` is a
//! clique for every v, and every maximal clique of the graph arises
//! this way. The parent of v is its right-neighbor earliest in the
//! remaining order; a parent's candidate clique is exactly covered by a
//! child's when it was not maximal. One linear pass over the order
//! builds the forest and marks the covered candidates, and a
//! depth-first traversal from the roots accumulates the survivors.
//!
//! Only valid after the order passed the chordality check.

use ivy_graph::{AdjacencyIndex, VertexId};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// A set of pairwise-adjacent vertices.
pub type Clique = BTreeSet<VertexId>;

/// Derives the maximal cliques of a chordal graph from a perfect
/// elimination ordering. O(V+E) for bounded-degree inputs; never
/// enumerates subsets.
pub fn maximal_cliques(order: &[VertexId], adjacency: &AdjacencyIndex) -> Vec<Clique> {
    let position: BTreeMap<VertexId, usize> =
        order.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut candidates: BTreeMap<VertexId, Clique> = BTreeMap::new();
    let mut parents: BTreeMap<VertexId, VertexId> = BTreeMap::new();
    let mut children: BTreeMap<VertexId, Vec<VertexId>> = BTreeMap::new();
    let mut roots: Vec<VertexId> = Vec::new();

    for (i, &v) in order.iter().enumerate() {
        let mut right: Vec<VertexId> = adjacency
            .neighbors(v)
            .iter()
            .copied()
            .filter(|u| position[u] > i)
            .collect();
        right.sort_by_key(|u| position[u]);

        match right.first() {
            Some(&parent) => {
                parents.insert(v, parent);
                children.entry(parent).or_default().push(v);
            }
            None => roots.push(v),
        }

        let candidate: Clique = std::iter::once(v).chain(right).collect();
        candidates.insert(v, candidate);
    }

    // A candidate survives unless a child's candidate covers it.
    let mut covered: BTreeSet<VertexId> = BTreeSet::new();
    for &v in order {
        if let Some(parent) = parents.get(&v) {
            if candidates[&v].is_superset(&candidates[parent]) {
                trace!("candidate clique of {} covered by child {}", parent, v);
                covered.insert(*parent);
            }
        }
    }

    let mut result: Vec<Clique> = Vec::new();
    let mut seen: BTreeSet<Clique> = BTreeSet::new();
    for &root in &roots {
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            if !covered.contains(&v) && seen.insert(candidates[&v].clone()) {
                result.push(candidates[&v].clone());
            }
            if let Some(kids) = children.get(&v) {
                for &child in kids.iter().rev() {
                    stack.push(child);
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chordality::is_perfect_elimination_order;
    use crate::lexbfs::elimination_order;
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

    fn cliques_of(adj: &AdjacencyIndex) -> Vec<Clique> {
        let order = elimination_order(adj);
        assert!(is_perfect_elimination_order(&order, adj));
        maximal_cliques(&order, adj)
    }

    fn clique(members: &[VertexId]) -> Clique {
        members.iter().copied().collect()
    }

    #[test]
    fn test_triangle_single_clique() {
        let adj = adjacency(&[1, 2, 3], &[(1, 2), (2, 3), (1, 3)]);
        assert_eq!(cliques_of(&adj), vec![clique(&[1, 2, 3])]);
    }

    #[test]
    fn test_path_cliques_are_edges() {
        let adj = adjacency(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
        let cliques = cliques_of(&adj);
        assert_eq!(cliques.len(), 3);
        for members in [[1, 2], [2, 3], [3, 4]] {
            assert!(cliques.contains(&clique(&members)), "missing {:?}", members);
        }
    }

    #[test]
    fn test_two_triangles_sharing_an_edge() {
        let adj = adjacency(&[1, 2, 3, 4], &[(1, 2), (1, 4), (2, 3), (2, 4), (3, 4)]);
        let cliques = cliques_of(&adj);
        assert_eq!(cliques.len(), 2);
        assert!(cliques.contains(&clique(&[1, 2, 4])));
        assert!(cliques.contains(&clique(&[2, 3, 4])));
    }

    #[test]
    fn test_isolated_vertices_become_singletons() {
        let adj = adjacency(&[1, 2, 3], &[(1, 2)]);
        let cliques = cliques_of(&adj);
        assert!(cliques.contains(&clique(&[1, 2])));
        assert!(cliques.contains(&clique(&[3])));
    }

    #[test]
    fn test_every_clique_is_maximal() {
        let adj = adjacency(
            &[1, 2, 3, 4, 5, 6],
            &[
                (1, 2),
                (1, 5),
                (2, 3),
                (2, 5),
                (3, 4),
                (3, 5),
                (4, 5),
                (4, 6),
            ],
        );
        let cliques = cliques_of(&adj);
        for c in &cliques {
            for w in adj.vertices().filter(|w| !c.contains(w)) {
                assert!(
                    c.iter().any(|&u| !adj.are_adjacent(u, w)),
                    "clique {:?} extendable by {}",
                    c,
                    w
                );
            }
        }
        assert_eq!(cliques.len(), 4);
    }

    #[test]
    fn test_every_vertex_and_edge_covered() {
        let adj = adjacency(&[1, 2, 3, 4, 5], &[(1, 2), (2, 3), (2, 4), (3, 4), (4, 5)]);
        let cliques = cliques_of(&adj);
        for v in adj.vertices() {
            assert!(cliques.iter().any(|c| c.contains(&v)));
        }
        for v in adj.vertices() {
            for &u in adj.neighbors(v) {
                assert!(cliques.iter().any(|c| c.contains(&v) && c.contains(&u)));
            }
        }
    }
}
