//! # SignalVault - Emergency Flow Extraction
//!
//! **SignalVault** turns the raw, noisy step lists that document extraction
//! produces into a clean, ordered, linear flow graph ready for a visual
//! renderer.
//!
//! ## Core Workflow
//!
//! 1.  **Receive Steps**: Decode the document-flow payload into a `DocumentFlow`.
//!     Missing or malformed step lists become zero steps rather than errors.
//! 2.  **Filter**: `StepFilter` drops empty entries, overlong prose and
//!     boilerplate (denylisted terms), then caps the survivors to the node limit
//!     without reordering them.
//! 3.  **Build**: `FlowGraphBuilder` lays the survivors out as a left-to-right
//!     chain of labelled nodes joined by animated edges, or a single placeholder
//!     node when nothing survived.
//! 4.  **Render**: Serialise the `FlowGraph` to JSON and hand it to the renderer.
//!
//! Every tunable (node cap, length threshold, denylist, spacing, markers) lives
//! in a `FlowPolicy`, which can be built in code or loaded from TOML.
//!
//! ## Quick Start
//!
//! ```rust
//! use signalvault::prelude::*;
//!
//! let flow = DocumentFlow::from_json(r#"{
//!     "filename": "gas_leak.txt",
//!     "query": "gas",
//!     "steps": ["Turn off gas.", "Call emergency services.", "This is a copyright notice."]
//! }"#).expect("valid payload");
//!
//! let view = FlowView::new(FlowPolicy::default());
//! let graph = view.load(&flow);
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.edges()[0].source, "node-0");
//! assert_eq!(graph.edges()[0].target, "node-1");
//! ```
//!
//! The two core stages can also be driven directly:
//!
//! ```rust
//! use signalvault::prelude::*;
//!
//! let policy = FlowPolicy::builder().max_nodes(3).build().expect("valid policy");
//! let steps = StepFilter::new(&policy).filter(&["Check breathing.", "Apply pressure."]);
//! let graph = FlowGraphBuilder::new(&policy).build(&steps);
//! println!("{}", graph);
//! ```

pub mod document;
pub mod error;
pub mod graph;
pub mod policy;
pub mod prelude;
pub mod steps;
pub mod view;
