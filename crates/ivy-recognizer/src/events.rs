//! Structured progress events.
//!
//! Hosts that want to trace a recognition run register an observer
//! callback instead of the recognizer printing anything itself. Events
//! borrow the recognizer's intermediate artifacts; an observer that
//! ignores them costs nothing.

use crate::clique_tree::Clique;
use ivy_graph::VertexId;

/// One step of a recognition run.
#[derive(Debug)]
pub enum RecognizerEvent<'a> {
    /// The adjacency index was built.
    AdjacencyBuilt { vertices: usize },
    /// The elimination order was computed.
    OrderComputed { order: &'a [VertexId] },
    /// The chordality verdict is in.
    ChordalityChecked { chordal: bool },
    /// The maximal clique collection was derived.
    CliquesComputed { cliques: &'a [Clique] },
    /// The arrangement search finished.
    ArrangementSearched { arrangement: Option<&'a [usize]> },
}

/// Callback invoked with each event of a run, in pipeline order.
pub type Observer<'a> = dyn FnMut(&RecognizerEvent<'_>) + 'a;
