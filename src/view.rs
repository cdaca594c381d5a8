//! Client-facing orchestration: search results and per-document flow views.
//!
//! Both views are plain request/response adapters. The caller invokes them with
//! the latest backend payload whenever the (document, query) pair changes and
//! replaces whatever it was showing with the result.

use crate::document::{DocumentFlow, SearchResponse};
use crate::error::PayloadError;
use crate::graph::{FlowGraph, FlowGraphBuilder};
use crate::policy::FlowPolicy;
use crate::steps::StepFilter;
use tracing::{debug, warn};

pub const FETCH_FAILED_STATUS: &str = "❌ Could not fetch results.";

/// Builds the flow graph for one document view.
#[derive(Debug, Clone, Default)]
pub struct FlowView {
    filter: StepFilter,
    builder: FlowGraphBuilder,
}

impl FlowView {
    pub fn new(policy: FlowPolicy) -> Self {
        Self {
            filter: StepFilter::new(&policy),
            builder: FlowGraphBuilder::new(&policy),
        }
    }

    pub fn load(&self, flow: &DocumentFlow) -> FlowGraph {
        debug!(
            filename = %flow.filename,
            query = %flow.query,
            raw_steps = flow.steps.len(),
            "loading flow view"
        );
        let steps = self.filter.filter(&flow.steps);
        self.builder.build(&steps)
    }

    /// Loads from a raw response body. Malformed bodies render as the
    /// placeholder graph.
    pub fn load_json(&self, json: &str) -> FlowGraph {
        self.load(&DocumentFlow::from_json_lenient(json))
    }
}

/// One row of the search result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub title: String,
    /// `None` for checklist items, which carry no score.
    pub score: Option<f64>,
    pub snippet: String,
    /// Whether the row links to a flow view.
    pub clickable: bool,
}

/// What the dashboard shows after a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub status: String,
    pub emergency: bool,
    pub entries: Vec<ResultEntry>,
}

/// Turns search responses into the status line and result list.
pub struct SearchView;

impl SearchView {
    pub fn present(response: Result<SearchResponse, PayloadError>) -> SearchOutcome {
        match response {
            Ok(SearchResponse::Emergency { query, checklist }) => SearchOutcome {
                status: format!("🚨 Emergency protocol: {}", query),
                emergency: true,
                entries: checklist
                    .into_iter()
                    .enumerate()
                    .map(|(i, tip)| ResultEntry {
                        title: format!("Emergency Step #{}", i + 1),
                        score: None,
                        snippet: tip,
                        clickable: false,
                    })
                    .collect(),
            },
            Ok(SearchResponse::Ranked { query, results }) => SearchOutcome {
                status: format!("Showing results for \"{}\"", query),
                emergency: false,
                entries: results
                    .into_iter()
                    .map(|hit| ResultEntry {
                        clickable: hit.is_clickable(),
                        title: hit.filename,
                        score: Some(hit.score),
                        snippet: hit.snippet,
                    })
                    .collect(),
            },
            Err(e) => {
                warn!(error = %e, "search failed");
                SearchOutcome {
                    status: FETCH_FAILED_STATUS.to_string(),
                    emergency: false,
                    entries: Vec::new(),
                }
            }
        }
    }

    pub fn present_json(json: &str) -> SearchOutcome {
        Self::present(SearchResponse::from_json(json))
    }
}
