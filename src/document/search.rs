use super::lenient;
use crate::error::PayloadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One ranked document returned by the search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHit {
    #[serde(default, deserialize_with = "lenient::string")]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub snippet: String,
    /// How many flow-worthy sentences the backend counted, when it reported it.
    #[serde(default, rename = "flowstep_count", deserialize_with = "lenient::count")]
    pub step_count: Option<usize>,
}

impl DocumentHit {
    /// A hit links to its flow view unless the backend counted zero steps.
    pub fn is_clickable(&self) -> bool {
        self.step_count != Some(0)
    }
}

/// The search backend's answer to a query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    /// The query matched a known emergency; the checklist bypasses the flow graph.
    Emergency { query: String, checklist: Vec<String> },
    /// Documents in the backend's ranking order.
    Ranked {
        query: String,
        results: Vec<DocumentHit>,
    },
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    emergency: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    query: String,
    /// Non-string items are dropped; a missing or non-array value stays `None`.
    #[serde(default, deserialize_with = "lenient::optional_string_list")]
    checklist: Option<Vec<String>>,
    #[serde(default)]
    results: Option<Vec<Value>>,
    error: Option<String>,
}

impl SearchResponse {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        let wire: WireResponse =
            serde_json::from_str(json).map_err(|e| PayloadError::JsonParseError(e.to_string()))?;
        Self::from_wire(wire)
    }

    pub fn query(&self) -> &str {
        match self {
            SearchResponse::Emergency { query, .. } | SearchResponse::Ranked { query, .. } => query,
        }
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, SearchResponse::Emergency { .. })
    }

    fn from_wire(wire: WireResponse) -> Result<Self, PayloadError> {
        if let Some(message) = wire.error {
            return Err(PayloadError::Backend(message));
        }
        if wire.emergency {
            let checklist = wire.checklist.ok_or(PayloadError::MissingField("checklist"))?;
            Ok(SearchResponse::Emergency {
                query: wire.query,
                checklist,
            })
        } else {
            let results = wire
                .results
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .filter_map(|(index, hit)| match serde_json::from_value(hit) {
                    Ok(hit) => Some(hit),
                    Err(e) => {
                        warn!(index, error = %e, "dropping unusable search hit");
                        None
                    }
                })
                .collect();
            Ok(SearchResponse::Ranked {
                query: wire.query,
                results,
            })
        }
    }
}
