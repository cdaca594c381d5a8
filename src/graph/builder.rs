use super::style::{EdgeKind, EdgeMarker, EdgeStyle, NodeStyle};
use super::types::{FlowEdge, FlowGraph, FlowNode, NodeData, Position, edge_id, node_id};
use crate::policy::FlowPolicy;
use crate::steps::FilteredSteps;
use itertools::Itertools;
use tracing::debug;

/// Turns a filtered step sequence into a left-to-right chain of nodes.
///
/// The topology is always a simple path, so layout is a fixed horizontal
/// spacing rather than a graph-drawing pass.
#[derive(Debug, Clone)]
pub struct FlowGraphBuilder {
    spacing: f64,
    markers: Vec<String>,
}

impl Default for FlowGraphBuilder {
    fn default() -> Self {
        Self::new(&FlowPolicy::default())
    }
}

impl FlowGraphBuilder {
    pub fn new(policy: &FlowPolicy) -> Self {
        Self {
            spacing: policy.spacing,
            markers: policy.markers.clone(),
        }
    }

    /// Builds the graph. An empty sequence yields the placeholder graph.
    pub fn build(&self, steps: &FilteredSteps) -> FlowGraph {
        if steps.is_empty() {
            debug!("no usable steps, building placeholder graph");
            return FlowGraph::placeholder();
        }

        let nodes: Vec<FlowNode> = steps
            .iter()
            .enumerate()
            .map(|(i, step)| FlowNode {
                id: node_id(i),
                data: NodeData {
                    label: self.label(i, step),
                },
                position: self.position(i),
                style: NodeStyle::step(),
            })
            .collect();

        // Edge i joins node i to node i + 1; ids are derived from indices, so
        // this relies on nodes being in step order.
        let edges: Vec<FlowEdge> = nodes
            .iter()
            .tuple_windows()
            .enumerate()
            .map(|(i, (source, target))| FlowEdge {
                id: edge_id(i),
                source: source.id.clone(),
                target: target.id.clone(),
                animated: true,
                kind: EdgeKind::SmoothStep,
                style: EdgeStyle::default(),
                marker_end: EdgeMarker::default(),
            })
            .collect();

        debug!(nodes = nodes.len(), edges = edges.len(), "built flow graph");
        FlowGraph::new(nodes, edges)
    }

    /// `<marker> Step <n>: <text>`, or without the marker when the set is empty.
    fn label(&self, index: usize, step: &str) -> String {
        if self.markers.is_empty() {
            format!("Step {}: {}", index + 1, step)
        } else {
            let marker = &self.markers[index % self.markers.len()];
            format!("{} Step {}: {}", marker, index + 1, step)
        }
    }

    fn position(&self, index: usize) -> Position {
        Position {
            x: index as f64 * self.spacing,
            y: 0.0,
        }
    }
}
