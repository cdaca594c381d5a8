//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the signalvault crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use signalvault::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let policy = FlowPolicy::from_file("path/to/policy.toml")?;
//! let payload = std::fs::read_to_string("path/to/flow.json")?;
//!
//! let graph = FlowView::new(policy).load_json(&payload);
//! println!("{}", graph.to_json()?);
//! # Ok(())
//! # }
//! ```

// Core stages
pub use crate::graph::{FlowEdge, FlowGraph, FlowGraphBuilder, FlowNode, visualize_graph};
pub use crate::steps::{FilteredSteps, Rejection, StepFilter, filter_steps};

// Configuration
pub use crate::policy::{FlowPolicy, FlowPolicyBuilder};

// Collaborator payloads and views
pub use crate::document::{DocumentFlow, DocumentHit, SearchResponse};
pub use crate::view::{FlowView, ResultEntry, SearchOutcome, SearchView};

// Error types
pub use crate::error::{PayloadError, PolicyError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
