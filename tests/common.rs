//! Common test fixtures for raw step lists and backend payloads.
use signalvault::prelude::*;

/// Short, action-like steps that pass every default filter.
#[allow(dead_code)]
pub fn valid_steps(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("Perform action number {}.", i))
        .collect()
}

/// A realistic extraction result: genuine steps interleaved with noise.
///
/// Survivors under the default policy, in order:
/// "Check for breathing.", "Apply pressure to the wound.", "Call for help."
#[allow(dead_code)]
pub fn noisy_steps() -> Vec<String> {
    vec![
        "Check for breathing.".to_string(),
        String::new(),
        "Note: this is not medical advice.".to_string(),
        "Apply pressure to the wound.".to_string(),
        "x".repeat(250),
        "See Also: Shock".to_string(),
        "Call for help.".to_string(),
        "© Copyright 2020 Red Cross".to_string(),
    ]
}

/// A document-flow payload containing non-string entries and a boilerplate line.
#[allow(dead_code)]
pub const FLOW_PAYLOAD_JSON: &str = r#"{
    "filename": "bleeding.pdf",
    "query": "bleeding",
    "steps": [
        "Apply direct pressure with a clean cloth.",
        null,
        42,
        "Keep the injured limb raised.",
        "Copyright 2019 First Aid Council."
    ]
}"#;

#[allow(dead_code)]
pub const EMERGENCY_SEARCH_JSON: &str = r#"{
    "emergency": true,
    "query": "earthquake",
    "checklist": ["Drop to the ground.", "Take cover under a table.", "Hold on until shaking stops."]
}"#;

#[allow(dead_code)]
pub const RANKED_SEARCH_JSON: &str = r#"{
    "emergency": false,
    "query": "burn",
    "results": [
        {"filename": "burns.pdf", "score": 3.2107, "snippet": "Rinse the burn...", "flowstep_count": 5},
        {"filename": "index.txt", "score": 0.4, "snippet": "Contents...", "flowstep_count": 0}
    ]
}"#;

/// Builds a graph from raw steps using the given policy.
#[allow(dead_code)]
pub fn build_graph(raw: &[String], policy: &FlowPolicy) -> FlowGraph {
    let steps = StepFilter::new(policy).filter(raw);
    FlowGraphBuilder::new(policy).build(&steps)
}
