use super::FlowPolicy;
use crate::error::PolicyError;

/// Fluent construction of a [`FlowPolicy`], starting from the defaults.
pub struct FlowPolicyBuilder {
    policy: FlowPolicy,
}

impl Default for FlowPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowPolicyBuilder {
    pub fn new() -> Self {
        Self {
            policy: FlowPolicy::default(),
        }
    }

    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.policy.max_nodes = max_nodes;
        self
    }

    pub fn max_step_length(mut self, length: usize) -> Self {
        self.policy.max_step_length = length;
        self
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.policy.spacing = spacing;
        self
    }

    /// Replaces the whole denylist. Pass an empty list to disable it.
    pub fn denylist<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.denylist = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one term to the current denylist.
    pub fn deny_term(mut self, term: impl Into<String>) -> Self {
        self.policy.denylist.push(term.into());
        self
    }

    pub fn markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<FlowPolicy, PolicyError> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}
