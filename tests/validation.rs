//! Tests for the structural validation rules and the report they produce.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_empty_graph_reports_missing_start() {
    let report = validate(&GraphStore::new().snapshot());
    assert_eq!(report.errors, vec!["No Start node detected.".to_string()]);
}

#[test]
fn test_valid_linear_workflow_is_clean() {
    let (store, [start, task, end]) = linear_workflow();
    let report = validate(&store.snapshot());
    assert!(report.is_clean());
    assert_eq!(report.is_node_valid(&start), Some(true));
    assert_eq!(report.is_node_valid(&task), Some(true));
    assert_eq!(report.is_node_valid(&end), Some(true));
}

#[test]
fn test_task_without_outgoing_edge() {
    // start-1 -> task-1 and nothing more: the task has an incoming edge but
    // no outgoing one, while the start node is fine.
    let store = store_from(
        vec![
            raw_node("start-1", NodeKind::Start, "start-1", None),
            raw_node("task-1", NodeKind::Task, "task-1", None),
        ],
        vec![raw_edge("edge-1", "start-1", "task-1")],
    );
    let report = validate(&store.snapshot());
    assert_eq!(
        report.errors,
        vec!["task-1 is not properly connected.".to_string()]
    );
    assert_eq!(report.is_node_valid("start-1"), Some(true));
    assert_eq!(report.is_node_valid("task-1"), Some(false));
}

#[test]
fn test_multiple_start_nodes() {
    let store = store_from(
        vec![
            raw_node("start-1", NodeKind::Start, "First", None),
            raw_node("start-2", NodeKind::Start, "Second", None),
        ],
        vec![],
    );
    let report = validate(&store.snapshot());
    // The start-count error comes first, then per-node connectivity errors
    // in graph iteration order.
    assert_eq!(
        report.errors,
        vec![
            "Multiple Start nodes detected.".to_string(),
            "First is not properly connected.".to_string(),
            "Second is not properly connected.".to_string(),
        ]
    );
}

#[test]
fn test_start_count_errors_are_mutually_exclusive() {
    for start_count in 0..=3 {
        let nodes = (0..start_count)
            .map(|i| raw_node(&format!("start-{}", i + 1), NodeKind::Start, "Start Node", None))
            .collect();
        let report = validate(&store_from(nodes, vec![]).snapshot());
        let none = report.errors.iter().filter(|e| *e == "No Start node detected.").count();
        let multi = report
            .errors
            .iter()
            .filter(|e| *e == "Multiple Start nodes detected.")
            .count();
        assert_eq!(none, usize::from(start_count == 0));
        assert_eq!(multi, usize::from(start_count > 1));
        assert!(none + multi <= 1);
    }
}

#[test]
fn test_end_node_valid_iff_targeted() {
    let disconnected = store_from(
        vec![
            raw_node("start-1", NodeKind::Start, "Start Node", None),
            raw_node("end-1", NodeKind::End, "End Node", None),
        ],
        vec![],
    );
    let report = validate(&disconnected.snapshot());
    assert_eq!(report.is_node_valid("end-1"), Some(false));

    let connected = store_from(
        vec![
            raw_node("start-1", NodeKind::Start, "Start Node", None),
            raw_node("end-1", NodeKind::End, "End Node", None),
        ],
        vec![raw_edge("edge-1", "start-1", "end-1")],
    );
    let report = validate(&connected.snapshot());
    assert!(report.is_clean());
    assert_eq!(report.is_node_valid("end-1"), Some(true));
}

#[test]
fn test_decision_needs_incoming_and_outgoing() {
    let store = store_from(
        vec![
            raw_node("start-1", NodeKind::Start, "Start Node", None),
            raw_node("decision-1", NodeKind::Decision, "Branch?", None),
            raw_node("end-1", NodeKind::End, "End Node", None),
        ],
        vec![raw_edge("edge-1", "start-1", "decision-1")],
    );
    let report = validate(&store.snapshot());
    assert!(report.errors.contains(&"Branch? is not properly connected.".to_string()));
    assert_eq!(report.is_node_valid("decision-1"), Some(false));

    let mut store = store;
    store.add_edge("decision-1", "end-1").expect("endpoints exist");
    let report = validate(&store.snapshot());
    assert_eq!(report.is_node_valid("decision-1"), Some(true));
}

#[test]
fn test_errors_use_the_node_label() {
    let store = store_from(
        vec![raw_node("start-1", NodeKind::Start, "Kick things off", None)],
        vec![],
    );
    let report = validate(&store.snapshot());
    assert_eq!(
        report.errors,
        vec!["Kick things off is not properly connected.".to_string()]
    );
}

#[test]
fn test_validation_is_pure_and_repeatable() {
    let (store, _) = linear_workflow();
    let snapshot = store.snapshot();
    let first = validate(&snapshot);
    let second = validate(&snapshot);
    assert_eq!(first, second);
}
