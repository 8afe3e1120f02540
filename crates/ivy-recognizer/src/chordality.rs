//! Perfect elimination ordering check.
//!
//! An ordering is a perfect elimination ordering when every vertex's
//! neighbors at later positions form a clique. A graph admits a PEO iff
//! it is chordal, and two non-adjacent right-neighbors are themselves
//! conclusive evidence of non-chordality; no secondary confirmation
//! pass is run.

use ivy_graph::{AdjacencyIndex, VertexId};
use tracing::trace;

/// True when `order` is a perfect elimination ordering of the graph.
///
/// Checks every vertex's right-neighborhood pairwise and short-circuits
/// on the first violation. Returns false rather than erring: the caller
/// treats a failed check as "not an interval graph".
pub fn is_perfect_elimination_order(order: &[VertexId], adjacency: &AdjacencyIndex) -> bool {
    for (i, &v) in order.iter().enumerate() {
        let right: Vec<VertexId> = order[i + 1..]
            .iter()
            .copied()
            .filter(|&u| adjacency.are_adjacent(v, u))
            .collect();

        for (j, &a) in right.iter().enumerate() {
            for &b in &right[j + 1..] {
                if !adjacency.are_adjacent(a, b) {
                    trace!(
                        "right-neighbors {} and {} of {} are not adjacent",
                        a,
                        b,
                        v
                    );
                    return false;
                }
            }
        }
    }
    true
}
