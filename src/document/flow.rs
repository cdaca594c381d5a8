use super::lenient;
use crate::error::PayloadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Raw steps extracted from one document for one query.
///
/// Mirrors the document-flow response body:
///
/// ```json
/// { "filename": "burns.pdf", "query": "burn", "steps": ["Cool the burn.", "..."] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFlow {
    /// Wrong-typed values decode as empty; only `steps` decides the outcome.
    #[serde(default, deserialize_with = "lenient::string")]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub query: String,
    /// Only string entries survive decoding; anything else is not a usable step.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub steps: Vec<String>,
}

impl DocumentFlow {
    /// Decodes a response body. A backend error body is reported as
    /// `PayloadError::Backend`.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| PayloadError::JsonParseError(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, PayloadError> {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(PayloadError::Backend(message.to_string()));
        }
        serde_json::from_value(value).map_err(|e| PayloadError::JsonParseError(e.to_string()))
    }

    /// Like [`DocumentFlow::from_json`], but any failure becomes a flow with no
    /// steps. A missing document and a document with only noise look the same
    /// to the viewer.
    pub fn from_json_lenient(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            warn!(error = %e, "unusable document-flow payload, treating as zero steps");
            Self::default()
        })
    }
}
