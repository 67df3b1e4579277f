use super::node::{Edge, EdgeStyle, Node, NodeKind, NodePatch, NodeStyle, Position};
use super::snapshot::{GraphSnapshot, WorkflowSnapshot};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Monotonic id counters, owned exclusively by the store and persisted
/// alongside the graph so ids are never reused across add/remove cycles
/// or across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdCounters {
    #[serde(default)]
    nodes: AHashMap<String, u64>,
    #[serde(default)]
    edges: u64,
}

impl IdCounters {
    fn next_node(&mut self, kind: NodeKind) -> String {
        let count = self.nodes.entry(kind.name().to_string()).or_insert(0);
        *count += 1;
        format!("{}-{}", kind, count)
    }

    fn next_edge(&mut self) -> String {
        self.edges += 1;
        format!("edge-{}", self.edges)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges == 0
    }

    /// Reconstructs counters from existing ids, for snapshots written before
    /// counters were persisted. Each counter starts past the highest numeric
    /// suffix seen, so freshly assigned ids cannot collide with loaded ones.
    pub fn rebuild(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut counters = Self::default();
        for node in nodes {
            if let Some(n) = trailing_number(&node.id) {
                let count = counters.nodes.entry(node.kind.name().to_string()).or_insert(0);
                *count = (*count).max(n);
            }
        }
        for edge in edges {
            if let Some(n) = trailing_number(&edge.id) {
                counters.edges = counters.edges.max(n);
            }
        }
        counters
    }
}

fn trailing_number(id: &str) -> Option<u64> {
    id.rsplit('-').next()?.parse().ok()
}

/// Owns the canonical node and edge collections of one workflow graph.
///
/// All mutations are serialized through the single `&mut self` receiver and
/// replace the collections copy-on-write: a [`GraphSnapshot`] taken before a
/// mutation keeps observing the state it was taken from, never a torn or
/// partially updated one.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Arc<Vec<Node>>,
    edges: Arc<Vec<Edge>>,
    counters: IdCounters,
    revision: u64,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            nodes: Arc::new(Vec::new()),
            edges: Arc::new(Vec::new()),
            counters: IdCounters::default(),
            revision: 0,
        }
    }

    /// Hydrates a store from a persisted snapshot. Counters missing from the
    /// snapshot are rebuilt from the ids it contains.
    pub fn from_snapshot(snapshot: WorkflowSnapshot) -> Self {
        let WorkflowSnapshot {
            nodes,
            edges,
            counters,
        } = snapshot;
        let counters = if counters.is_empty() {
            IdCounters::rebuild(&nodes, &edges)
        } else {
            counters
        };
        Self {
            nodes: Arc::new(nodes),
            edges: Arc::new(edges),
            counters,
            revision: 0,
        }
    }

    /// Adds a node of the given kind at a canvas position, assigning the next
    /// monotonic `"{kind}-{n}"` id and the kind's default label and style.
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> &Node {
        let node = Node {
            id: self.counters.next_node(kind),
            kind,
            label: kind.default_label().to_string(),
            execution_time: None,
            position,
            style: NodeStyle::for_kind(kind),
        };
        self.revision += 1;
        let nodes = Arc::make_mut(&mut self.nodes);
        nodes.push(node);
        &nodes[nodes.len() - 1]
    }

    /// Translates a palette drop payload into [`add_node`](Self::add_node).
    /// An unrecognized kind string is silently ignored and creates nothing.
    pub fn add_node_from_palette(&mut self, kind: &str, position: Position) -> Option<&Node> {
        let kind = NodeKind::from_palette(kind)?;
        Some(self.add_node(kind, position))
    }

    /// Merges the patch into the node's data. Returns `false` (a no-op, not
    /// an error) if the id is absent.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> bool {
        let Some(index) = self.nodes.iter().position(|n| n.id == id) else {
            return false;
        };
        self.revision += 1;
        let node = &mut Arc::make_mut(&mut self.nodes)[index];
        if let Some(label) = patch.label {
            node.label = label;
        }
        if let Some(value) = patch.execution_time {
            node.execution_time = Some(value);
        }
        if let Some(position) = patch.position {
            node.position = position;
        }
        true
    }

    /// Removes the node and every edge whose source or target references it.
    /// No-op if the id is absent.
    pub fn remove_node(&mut self, id: &str) {
        if !self.nodes.iter().any(|n| n.id == id) {
            return;
        }
        self.revision += 1;
        Arc::make_mut(&mut self.nodes).retain(|n| n.id != id);
        Arc::make_mut(&mut self.edges).retain(|e| e.source != id && e.target != id);
    }

    /// Connects two nodes. Returns `None` without creating anything when
    /// either endpoint id is absent. Duplicate edges between the same ordered
    /// pair are permitted.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Option<&Edge> {
        if !self.contains_node(source) || !self.contains_node(target) {
            return None;
        }
        let edge = Edge {
            id: self.counters.next_edge(),
            source: source.to_string(),
            target: target.to_string(),
            style: EdgeStyle::default(),
        };
        self.revision += 1;
        let edges = Arc::make_mut(&mut self.edges);
        edges.push(edge);
        Some(&edges[edges.len() - 1])
    }

    /// Removes an edge by id. No-op if absent.
    pub fn remove_edge(&mut self, id: &str) {
        if !self.edges.iter().any(|e| e.id == id) {
            return;
        }
        self.revision += 1;
        Arc::make_mut(&mut self.edges).retain(|e| e.id != id);
    }

    /// An immutable `{nodes, edges}` view of the current state. Cheap to
    /// take; stays valid across later mutations.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::new(Arc::clone(&self.nodes), Arc::clone(&self.edges))
    }

    /// The fully materialized persistable form, counters included.
    pub fn workflow_snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            nodes: (*self.nodes).clone(),
            edges: (*self.edges).clone(),
            counters: self.counters.clone(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Bumped on every mutating operation; lets callers detect unsaved work.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
