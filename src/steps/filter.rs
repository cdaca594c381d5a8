use super::{FilteredSteps, Rejection};
use crate::policy::FlowPolicy;
use tracing::{debug, trace};

/// Applies the policy's noise heuristics to a raw step list.
///
/// This is best-effort suppression, not classification: a genuine step that
/// happens to mention "notebook" is dropped, boilerplate that avoids every
/// denylisted word is kept.
#[derive(Debug, Clone)]
pub struct StepFilter {
    max_nodes: usize,
    max_step_length: usize,
    /// Lowercased once here so each step only pays for its own lowercasing.
    denylist: Vec<String>,
}

impl Default for StepFilter {
    fn default() -> Self {
        Self::new(&FlowPolicy::default())
    }
}

impl StepFilter {
    pub fn new(policy: &FlowPolicy) -> Self {
        Self {
            max_nodes: policy.max_nodes,
            max_step_length: policy.max_step_length,
            denylist: policy.denylist.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Filters `raw` and truncates to the policy's node cap.
    pub fn filter<S: AsRef<str>>(&self, raw: &[S]) -> FilteredSteps {
        self.filter_capped(raw, self.max_nodes)
    }

    /// Filters `raw` and keeps at most the first `max_nodes` survivors.
    ///
    /// Single pass, order preserving. Steps past the cap are dropped, never
    /// reordered.
    pub fn filter_capped<S: AsRef<str>>(&self, raw: &[S], max_nodes: usize) -> FilteredSteps {
        let mut kept = Vec::with_capacity(max_nodes.min(raw.len()));
        let mut rejected = 0usize;

        for (index, step) in raw.iter().enumerate() {
            if kept.len() == max_nodes {
                trace!(index, "node cap reached, ignoring remaining steps");
                break;
            }
            let step = step.as_ref();
            if let Some(reason) = self.rejection(step) {
                trace!(index, reason = %reason, "dropping step");
                rejected += 1;
                continue;
            }
            kept.push(step.to_string());
        }

        debug!(
            raw = raw.len(),
            kept = kept.len(),
            rejected,
            cap = max_nodes,
            "filtered flow steps"
        );
        FilteredSteps::new(kept)
    }

    /// Returns the first reason `step` would be discarded, in evaluation order:
    /// emptiness, then length, then the denylist.
    ///
    /// Whitespace-only steps count as empty: they are not a usable step even
    /// though they are non-empty strings.
    pub fn rejection(&self, step: &str) -> Option<Rejection> {
        if step.trim().is_empty() {
            return Some(Rejection::Empty);
        }

        let length = step.chars().count();
        if length >= self.max_step_length {
            return Some(Rejection::TooLong {
                length,
                limit: self.max_step_length,
            });
        }

        let lowered = step.to_lowercase();
        self.denylist
            .iter()
            .find(|term| lowered.contains(term.as_str()))
            .map(|term| Rejection::Denylisted { term: term.clone() })
    }
}

/// Filters with the default thresholds and an explicit node cap.
pub fn filter_steps<S: AsRef<str>>(raw: &[S], max_nodes: usize) -> FilteredSteps {
    StepFilter::default().filter_capped(raw, max_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_order() {
        let filter = StepFilter::default();
        assert_eq!(filter.rejection(""), Some(Rejection::Empty));
        assert_eq!(filter.rejection("   \t"), Some(Rejection::Empty));

        // Long and denylisted: length is checked first.
        let long_note = format!("note {}", "x".repeat(200));
        assert!(matches!(
            filter.rejection(&long_note),
            Some(Rejection::TooLong { limit: 180, .. })
        ));

        assert_eq!(
            filter.rejection("See Also: burns"),
            Some(Rejection::Denylisted {
                term: "see also".to_string()
            })
        );
        assert_eq!(filter.rejection("Apply pressure to the wound."), None);
    }

    #[test]
    fn test_denylist_is_case_insensitive_both_ways() {
        let policy = FlowPolicy::builder().denylist(["DISCLAIMER"]).build().unwrap();
        let filter = StepFilter::new(&policy);
        assert!(filter.rejection("disclaimer: not medical advice").is_some());
        assert!(filter.rejection("Disclaimer").is_some());
        // The default terms are gone once the list is replaced.
        assert!(filter.rejection("Note the time.").is_none());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let filter = StepFilter::default();
        // 179 two-byte characters: 358 bytes, still under the limit.
        let step = "é".repeat(179);
        assert_eq!(filter.rejection(&step), None);
        let step = "é".repeat(180);
        assert!(matches!(filter.rejection(&step), Some(Rejection::TooLong { length: 180, .. })));
    }

    #[test]
    fn test_zero_cap_yields_empty() {
        let filtered = StepFilter::default().filter_capped(&["Call for help."], 0);
        assert!(filtered.is_empty());
    }
}
