use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a workflow node, matching the palette entries of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Task,
    Decision,
    End,
}

impl NodeKind {
    /// All palette kinds, in palette order.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Start,
        NodeKind::Task,
        NodeKind::Decision,
        NodeKind::End,
    ];

    /// Parses the drag-and-drop payload string emitted by the canvas palette.
    /// Unrecognized strings yield `None`; dropping such a payload is a no-op.
    pub fn from_palette(kind: &str) -> Option<Self> {
        match kind {
            "start" => Some(NodeKind::Start),
            "task" => Some(NodeKind::Task),
            "decision" => Some(NodeKind::Decision),
            "end" => Some(NodeKind::End),
            _ => None,
        }
    }

    /// The lowercase wire name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Task => "task",
            NodeKind::Decision => "decision",
            NodeKind::End => "end",
        }
    }

    /// Default display label assigned when a palette item is dropped.
    pub fn default_label(&self) -> &'static str {
        match self {
            NodeKind::Start => "Start Node",
            NodeKind::Task => "Task Node",
            NodeKind::Decision => "Decision Node",
            NodeKind::End => "End Node",
        }
    }

    /// Palette background color for this kind.
    pub fn palette_color(&self) -> &'static str {
        match self {
            NodeKind::Start => "#4CAF50",
            NodeKind::Task => "#2196F3",
            NodeKind::Decision => "#FFC107",
            NodeKind::End => "#f44336",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Canvas coordinates of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visual styling of a node, carried through persistence so the rendering
/// layer can restore the palette colors on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeStyle {
    pub background: String,
    pub color: String,
}

impl NodeStyle {
    pub fn for_kind(kind: NodeKind) -> Self {
        Self {
            background: kind.palette_color().to_string(),
            color: "white".to_string(),
        }
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            background: String::new(),
            color: "white".to_string(),
        }
    }
}

/// A typed, labeled vertex in the workflow graph.
///
/// `execution_time` is user-entered metadata, never a measured quantity. The
/// property form writes whatever the field held, so the value is stored
/// verbatim (a JSON number, a string, or null) and only normalized by the
/// analytics aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    #[serde(default)]
    pub execution_time: Option<serde_json::Value>,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub style: NodeStyle,
}

/// A partial update applied to a node by the property-editor form.
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub label: Option<String>,
    pub execution_time: Option<serde_json::Value>,
    pub position: Option<Position>,
}

impl NodePatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn execution_time(value: impl Into<serde_json::Value>) -> Self {
        Self {
            execution_time: Some(value.into()),
            ..Self::default()
        }
    }
}

/// Visual styling of an edge. The defaults mirror what the canvas applies
/// when two nodes are connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EdgeStyle {
    pub stroke: String,
    pub variant: String,
    pub animated: bool,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: "#0000FF".to_string(),
            variant: "smoothstep".to_string(),
            animated: true,
        }
    }
}

/// A directed connection between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub style: EdgeStyle,
}
