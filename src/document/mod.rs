//! Payloads received from the search and document-flow backends.

pub mod flow;
mod lenient;
pub mod search;

pub use flow::*;
pub use lenient::normalize_steps;
pub use search::*;
