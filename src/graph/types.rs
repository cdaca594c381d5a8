use super::style::{EdgeKind, EdgeMarker, EdgeStyle, NodeStyle};
use serde::{Deserialize, Serialize};

/// Identity of the single node in a graph built from zero steps.
pub const EMPTY_NODE_ID: &str = "empty";
pub const PLACEHOLDER_LABEL: &str = "No useful steps found";
pub const PLACEHOLDER_POSITION: Position = Position { x: 100.0, y: 100.0 };

/// `node-<index>`; the suffix is also the node's position in the graph.
pub fn node_id(index: usize) -> String {
    format!("node-{}", index)
}

/// `edge-<index>`; connects `node-<index>` to `node-<index + 1>`.
pub fn edge_id(index: usize) -> String {
    format!("edge-{}", index)
}

/// Layout hint in renderer units. The renderer may auto-fit over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    pub data: NodeData,
    pub position: Position,
    pub style: NodeStyle,
}

impl FlowNode {
    pub fn label(&self) -> &str {
        &self.data.label
    }
}

/// A directed connection between consecutive nodes. Carries rendering hints only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub style: EdgeStyle,
    pub marker_end: EdgeMarker,
}

/// A linear chain of step nodes, or the single placeholder node.
///
/// Built once per (document, query) pair and never patched afterwards; a
/// change of input means building a new graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub(crate) fn new(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        debug_assert_eq!(edges.len(), nodes.len().saturating_sub(1));
        Self { nodes, edges }
    }

    pub(crate) fn placeholder() -> Self {
        Self {
            nodes: vec![FlowNode {
                id: EMPTY_NODE_ID.to_string(),
                data: NodeData {
                    label: PLACEHOLDER_LABEL.to_string(),
                },
                position: PLACEHOLDER_POSITION,
                style: NodeStyle::placeholder(),
            }],
            edges: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// True when no step survived filtering and only the sentinel node exists.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.nodes.as_slice(), [only] if only.id == EMPTY_NODE_ID)
    }

    /// Number of real step nodes; zero for the placeholder graph.
    pub fn step_count(&self) -> usize {
        if self.is_placeholder() {
            0
        } else {
            self.nodes.len()
        }
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Serialises the graph in the renderer's JSON shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
