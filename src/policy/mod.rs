//! Tunable parameters shared by the step filter and the graph builder.
//!
//! Several dashboard variants disagreed on the exact thresholds, marker sets
//! and whether a denylist applies at all. `FlowPolicy` gathers those points of
//! disagreement into one value so a single implementation can serve all of them.
//!
//! Policies can be built in code with [`FlowPolicy::builder`] or loaded from a
//! TOML document where every key is optional:
//!
//! ```toml
//! max_nodes = 8
//! max_step_length = 220
//! denylist = ["note", "see also", "copyright", "disclaimer"]
//! spacing = 380.0
//! markers = ["1.", "2.", "3."]
//! ```

use crate::error::PolicyError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

mod builder;

pub use builder::FlowPolicyBuilder;

pub const DEFAULT_MAX_NODES: usize = 6;
pub const DEFAULT_MAX_STEP_LENGTH: usize = 180;
pub const DEFAULT_SPACING: f64 = 420.0;
pub const DEFAULT_DENYLIST: [&str; 3] = ["note", "see also", "copyright"];
pub const DEFAULT_MARKERS: [&str; 7] = ["🧠", "🧼", "🧯", "🩹", "📞", "🚑", "✅"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowPolicy {
    /// Upper bound on the number of steps that survive filtering.
    pub max_nodes: usize,
    /// Steps with at least this many characters are treated as prose and dropped.
    pub max_step_length: usize,
    /// Case-insensitive substrings that mark a step as boilerplate.
    pub denylist: Vec<String>,
    /// Horizontal distance between consecutive nodes, in layout units.
    pub spacing: f64,
    /// Decorative markers, cycled by step index. May be empty.
    pub markers: Vec<String>,
}

impl Default for FlowPolicy {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_step_length: DEFAULT_MAX_STEP_LENGTH,
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
            spacing: DEFAULT_SPACING,
            markers: DEFAULT_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FlowPolicy {
    pub fn builder() -> FlowPolicyBuilder {
        FlowPolicyBuilder::new()
    }

    /// Parses a policy from a TOML string. Missing keys keep their defaults.
    pub fn load_from_str(toml_str: &str) -> Result<Self, PolicyError> {
        let policy: FlowPolicy =
            toml::from_str(toml_str).map_err(|e| PolicyError::TomlParseError(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reads and parses a policy file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PolicyError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::load_from_str(&content)
    }

    /// Checks that every tunable is in a usable range.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_nodes == 0 {
            return Err(PolicyError::InvalidMaxNodes(self.max_nodes));
        }
        if self.max_step_length == 0 {
            return Err(PolicyError::InvalidStepLength(self.max_step_length));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(PolicyError::InvalidSpacing(self.spacing));
        }
        if let Some(pos) = self.denylist.iter().position(|t| t.trim().is_empty()) {
            return Err(PolicyError::BlankDenyTerm(pos));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_dashboard() {
        let policy = FlowPolicy::default();
        assert_eq!(policy.max_nodes, 6);
        assert_eq!(policy.max_step_length, 180);
        assert_eq!(policy.denylist, vec!["note", "see also", "copyright"]);
        assert_eq!(policy.spacing, 420.0);
        assert_eq!(policy.markers.len(), 7);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml_str = r#"
        max_nodes = 10
        denylist = ["disclaimer"]
        "#;
        let policy = FlowPolicy::load_from_str(toml_str).unwrap();
        assert_eq!(policy.max_nodes, 10);
        assert_eq!(policy.denylist, vec!["disclaimer"]);
        assert_eq!(policy.max_step_length, DEFAULT_MAX_STEP_LENGTH);
        assert_eq!(policy.spacing, DEFAULT_SPACING);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(FlowPolicy::load_from_str("").unwrap(), FlowPolicy::default());
    }

    #[test]
    fn test_toml_rejects_zero_nodes() {
        let err = FlowPolicy::load_from_str("max_nodes = 0").unwrap_err();
        assert_eq!(err, PolicyError::InvalidMaxNodes(0));
    }

    #[test]
    fn test_toml_rejects_unknown_key() {
        let err = FlowPolicy::load_from_str("max_nodez = 3").unwrap_err();
        assert!(matches!(err, PolicyError::TomlParseError(_)));
    }

    #[test]
    fn test_blank_deny_term_is_invalid() {
        let err = FlowPolicy::load_from_str(r#"denylist = ["note", "  "]"#).unwrap_err();
        assert_eq!(err, PolicyError::BlankDenyTerm(1));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = FlowPolicy::from_file("does/not/exist.toml").unwrap_err();
        match err {
            PolicyError::Io { path, .. } => assert!(path.contains("exist.toml")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
