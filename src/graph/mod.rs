//! Flow graph construction and the renderer-facing graph model.

mod builder;
pub mod style;
mod types;
pub mod visualizer;

pub use builder::FlowGraphBuilder;
pub use style::{EdgeKind, EdgeMarker, EdgeStyle, MarkerKind, NodeStyle};
pub use types::*;
pub use visualizer::visualize_graph;
