use super::node::{Edge, Node};
use super::store::IdCounters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An immutable, fully-materialized view of the graph at a point in time.
///
/// Snapshots share storage with the [`GraphStore`](super::GraphStore) they
/// were taken from; later store mutations copy-on-write and leave every
/// outstanding snapshot untouched, so a reader mid-iteration (a chart
/// render, a validation pass) never observes partial state.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    nodes: Arc<Vec<Node>>,
    edges: Arc<Vec<Edge>>,
}

impl GraphSnapshot {
    pub(crate) fn new(nodes: Arc<Vec<Node>>, edges: Arc<Vec<Edge>>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// The persisted form of a workflow: the `{nodes, edges}` record plus the
/// store's id counters, so id assignment stays monotonic across sessions.
///
/// Every field is `#[serde(default)]`: snapshots written by older editors
/// (or with missing arrays) hydrate to empty collections rather than fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub counters: IdCounters,
}
