//! Consecutive arrangement search over maximal cliques.
//!
//! By the Fulkerson–Gross theorem, a chordal graph is interval iff its
//! maximal cliques can be lined up so that every vertex's cliques
//! occupy a contiguous run of positions. The search works on the
//! clique-intersection graph: one node per clique, an edge where two
//! cliques share a vertex. A valid arrangement of a connected graph is
//! necessarily a Hamiltonian path of the intersection graph, so the
//! search enumerates Hamiltonian paths by backtracking and validates
//! each completed path against the contiguity property.

use crate::clique_tree::Clique;
use ivy_graph::VertexId;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Searches for an arrangement of `cliques` with the consecutive
/// property. Returns clique indices in arrangement order, or `None`
/// when no arrangement exists.
///
/// A disconnected clique-intersection graph is rejected outright: the
/// recognizer targets connected graphs and treats multi-component
/// inputs as out of contract. Worst-case exponential in the clique
/// count, which for chordal graphs is bounded by the vertex count.
pub fn find_consecutive_arrangement(cliques: &[Clique]) -> Option<Vec<usize>> {
    if cliques.len() <= 1 {
        return Some((0..cliques.len()).collect());
    }

    let graph = intersection_graph(cliques);
    if connected_components(&graph) != 1 {
        debug!("clique-intersection graph is disconnected");
        return None;
    }

    for start in 0..cliques.len() {
        trace!("arrangement search from clique {}", start);
        let mut path = vec![NodeIndex::new(start)];
        let mut used = vec![false; cliques.len()];
        used[start] = true;
        if extend_path(cliques, &graph, &mut path, &mut used) {
            return Some(path.into_iter().map(|n| n.index()).collect());
        }
    }
    None
}

/// Checks the defining property: `arrangement` is a permutation of the
/// clique indices in which consecutive cliques intersect and every
/// vertex's positions form a gap-free range.
pub fn is_consecutive_arrangement(cliques: &[Clique], arrangement: &[usize]) -> bool {
    if arrangement.len() != cliques.len() {
        return false;
    }
    let mut taken = vec![false; cliques.len()];
    for &c in arrangement {
        if c >= cliques.len() || taken[c] {
            return false;
        }
        taken[c] = true;
    }

    for pair in arrangement.windows(2) {
        if cliques[pair[0]].is_disjoint(&cliques[pair[1]]) {
            return false;
        }
    }

    let mut runs: BTreeMap<VertexId, (usize, usize, usize)> = BTreeMap::new();
    for (pos, &c) in arrangement.iter().enumerate() {
        for &v in &cliques[c] {
            runs.entry(v)
                .and_modify(|(min, max, count)| {
                    *min = (*min).min(pos);
                    *max = (*max).max(pos);
                    *count += 1;
                })
                .or_insert((pos, pos, 1));
        }
    }
    runs.values().all(|&(min, max, count)| max - min + 1 == count)
}

fn intersection_graph(cliques: &[Clique]) -> UnGraph<usize, ()> {
    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<NodeIndex> = (0..cliques.len()).map(|i| graph.add_node(i)).collect();
    for i in 0..cliques.len() {
        for j in i + 1..cliques.len() {
            if !cliques[i].is_disjoint(&cliques[j]) {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
    }
    graph
}

/// Extends a partial Hamiltonian path, expanding unvisited neighbors in
/// ascending clique-index order so the search is deterministic. A
/// completed path counts only if it passes the contiguity validation;
/// otherwise the search backtracks and continues.
fn extend_path(
    cliques: &[Clique],
    graph: &UnGraph<usize, ()>,
    path: &mut Vec<NodeIndex>,
    used: &mut [bool],
) -> bool {
    if path.len() == cliques.len() {
        let arrangement: Vec<usize> = path.iter().map(|n| n.index()).collect();
        return is_consecutive_arrangement(cliques, &arrangement);
    }

    let last = path[path.len() - 1];
    let mut frontier: Vec<NodeIndex> = graph
        .neighbors(last)
        .filter(|n| !used[n.index()])
        .collect();
    frontier.sort_by_key(|n| n.index());

    for next in frontier {
        path.push(next);
        used[next.index()] = true;
        if extend_path(cliques, graph, path, used) {
            return true;
        }
        path.pop();
        used[next.index()] = false;
    }
    false
}
