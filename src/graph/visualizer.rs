use super::types::FlowGraph;
use std::fmt;

/// Formats a `FlowGraph` into a human-readable listing for terminal inspection.
pub fn visualize_graph(graph: &FlowGraph) -> String {
    graph.to_string()
}

impl fmt::Display for FlowGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            writeln!(f, "======== FLOW GRAPH (no steps) ========")?;
        } else {
            writeln!(f, "======== FLOW GRAPH: {} step(s) ========", self.step_count())?;
        }

        writeln!(f, "\n--- NODES ---")?;
        for node in self.nodes() {
            writeln!(
                f,
                "{:<8} @ ({:>6}, {:>4})  {}",
                node.id, node.position.x, node.position.y, node.data.label
            )?;
        }

        if !self.edges().is_empty() {
            writeln!(f, "\n--- EDGES ---")?;
            for edge in self.edges() {
                writeln!(f, "{:<8} {} -> {}", edge.id, edge.source, edge.target)?;
            }
        }

        write!(f, "\n=======================================")
    }
}
