//! Execution-time analytics derived from node metadata.
//!
//! Aggregation is a pure function of the node collection: it consults no
//! edges and does not care whether the graph is structurally valid. The
//! three derived views feed the chart widgets directly and are recomputed
//! on request, never persisted.

use crate::graph::Node;
use ahash::AHashMap;
use itertools::Itertools;

/// One `(label, value)` sample of the per-node series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Summed execution time for one node kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSlice {
    pub kind: String,
    pub total: f64,
}

/// The three chart-ready datasets derived from one node collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsReport {
    /// Per-node execution time, in graph node order (bar chart).
    pub per_node: Vec<SeriesPoint>,
    /// Running prefix sum over the same order (line chart).
    pub cumulative: Vec<f64>,
    /// Totals grouped by kind, ordered by first appearance (pie chart).
    pub per_type: Vec<TypeSlice>,
    /// Sum of every execution time; equals the last cumulative value.
    pub total: f64,
}

/// Aggregates node metadata into the chart-ready datasets.
///
/// Normalization never fails: an empty label becomes `"Unnamed"` and an
/// absent or unparsable execution time becomes `0.0`.
pub fn aggregate(nodes: &[Node]) -> AnalyticsReport {
    let samples: Vec<(&Node, f64)> = nodes
        .iter()
        .map(|node| (node, execution_time_of(node)))
        .collect();

    let per_node: Vec<SeriesPoint> = samples
        .iter()
        .map(|(node, value)| SeriesPoint {
            label: if node.label.is_empty() {
                "Unnamed".to_string()
            } else {
                node.label.clone()
            },
            value: *value,
        })
        .collect();

    let mut running = 0.0;
    let cumulative: Vec<f64> = samples
        .iter()
        .map(|(_, value)| {
            running += value;
            running
        })
        .collect();

    let mut sums: AHashMap<&str, f64> = AHashMap::new();
    for (node, value) in &samples {
        *sums.entry(node.kind.name()).or_insert(0.0) += value;
    }
    let per_type: Vec<TypeSlice> = samples
        .iter()
        .map(|(node, _)| node.kind.name())
        .unique()
        .map(|kind| TypeSlice {
            kind: kind.to_string(),
            total: sums.get(kind).copied().unwrap_or(0.0),
        })
        .collect();

    let total = samples.iter().map(|(_, value)| value).sum();

    AnalyticsReport {
        per_node,
        cumulative,
        per_type,
        total,
    }
}

/// Normalizes the raw execution-time metadata of a node to a number.
/// Numbers pass through; strings are parsed like the property form entered
/// them; everything else (missing, null, booleans) is `0.0`.
fn execution_time_of(node: &Node) -> f64 {
    match node.execution_time.as_ref() {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(serde_json::Value::String(s)) => parse_float_prefix(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parses the longest leading float prefix of the trimmed text, so form
/// entries like `"10ms"` still count as `10`. Returns `None` when no prefix
/// parses to a usable number.
fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut cuts: Vec<usize> = trimmed.char_indices().map(|(i, _)| i).skip(1).collect();
    cuts.push(trimmed.len());
    cuts.iter()
        .rev()
        .find_map(|&end| trimmed[..end].parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}
