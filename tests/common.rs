//! Common test utilities for building workflow graphs and snapshots.
use nagare::prelude::*;

/// Builds a node directly, bypassing the store's id assignment, for tests
/// that need specific ids or labels.
#[allow(dead_code)]
pub fn raw_node(
    id: &str,
    kind: NodeKind,
    label: &str,
    execution_time: Option<serde_json::Value>,
) -> Node {
    Node {
        id: id.to_string(),
        kind,
        label: label.to_string(),
        execution_time,
        position: Position::default(),
        style: NodeStyle::for_kind(kind),
    }
}

/// Builds an edge directly with a given id.
#[allow(dead_code)]
pub fn raw_edge(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        style: EdgeStyle::default(),
    }
}

/// Hydrates a store from hand-built collections, the way a load would.
#[allow(dead_code)]
pub fn store_from(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphStore {
    GraphStore::from_snapshot(WorkflowSnapshot {
        nodes,
        edges,
        counters: Default::default(),
    })
}

/// Builds a structurally valid start -> task -> end workflow through the
/// store API, returning the store and the three node ids.
#[allow(dead_code)]
pub fn linear_workflow() -> (GraphStore, [String; 3]) {
    let mut store = GraphStore::new();
    let start = store
        .add_node(NodeKind::Start, Position::new(0.0, 0.0))
        .id
        .clone();
    let task = store
        .add_node(NodeKind::Task, Position::new(150.0, 0.0))
        .id
        .clone();
    let end = store
        .add_node(NodeKind::End, Position::new(300.0, 0.0))
        .id
        .clone();
    store.add_edge(&start, &task).expect("both endpoints exist");
    store.add_edge(&task, &end).expect("both endpoints exist");
    (store, [start, task, end])
}
