//! Structural validation of a workflow graph snapshot.
//!
//! Validation is a pure function of a snapshot: it is recomputed only when
//! explicitly invoked (the save path, or an explicit validate command from
//! the canvas), never reactively on every edit. The annotated flags it
//! returns are display hints for the rendering layer and may go stale
//! between edits.

use crate::graph::{GraphSnapshot, NodeKind};
use ahash::AHashMap;

/// The outcome of one validation pass: ordered error messages plus a
/// per-node validity flag used by the rendering layer for highlighting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub annotated: AHashMap<String, bool>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// The derived validity flag for a node, if it was part of the validated
    /// snapshot.
    pub fn is_node_valid(&self, id: &str) -> Option<bool> {
        self.annotated.get(id).copied()
    }
}

/// Validates a graph snapshot against the structural rules.
///
/// Rules: exactly one start node must exist, and every node must be
/// connected according to its kind (start needs an outgoing edge, end an
/// incoming one, everything else both). Violations accumulate in the report
/// in graph iteration order; nothing is ever thrown.
pub fn validate(snapshot: &GraphSnapshot) -> ValidationReport {
    let mut report = ValidationReport::default();

    let start_count = snapshot
        .nodes()
        .iter()
        .filter(|n| n.kind == NodeKind::Start)
        .count();
    if start_count > 1 {
        report.errors.push("Multiple Start nodes detected.".to_string());
    } else if start_count == 0 {
        report.errors.push("No Start node detected.".to_string());
    }

    for node in snapshot.nodes() {
        let has_incoming = snapshot.edges().iter().any(|e| e.target == node.id);
        let has_outgoing = snapshot.edges().iter().any(|e| e.source == node.id);

        let is_valid = match node.kind {
            NodeKind::Start => has_outgoing,
            NodeKind::End => has_incoming,
            NodeKind::Task | NodeKind::Decision => has_incoming && has_outgoing,
        };

        if !is_valid {
            report
                .errors
                .push(format!("{} is not properly connected.", node.label));
        }
        report.annotated.insert(node.id.clone(), is_valid);
    }

    report
}
