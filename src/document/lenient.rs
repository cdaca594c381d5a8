//! Field decoders that never fail on a wrong-typed value.
//!
//! Backend payloads are assembled loosely; a `null` or mistyped sibling field
//! must not discard the rest of the body. Each decoder here maps anything it
//! cannot use to the field's empty value. All of them need `#[serde(default)]`
//! alongside `deserialize_with` so a missing key also decodes.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Keeps the string elements of a JSON array, in order. Any other shape is
/// an empty list.
pub fn normalize_steps(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(normalize_steps(value.as_ref()))
}

/// Like [`string_list`], but an absent or non-array value stays `None` so the
/// caller can tell "no list" from "empty list".
pub(crate) fn optional_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(list @ Value::Array(_)) => Some(normalize_steps(Some(&list))),
        _ => None,
    })
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_bool).unwrap_or_default())
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64).unwrap_or_default())
}

/// A non-negative integer count; anything else is "not reported".
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok()))
}
