//! Tests for flow graph construction and its renderer-facing JSON shape.
mod common;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use signalvault::graph::{EMPTY_NODE_ID, PLACEHOLDER_LABEL, edge_id, node_id};
use signalvault::prelude::*;

#[test]
fn test_placeholder_graph_for_no_steps() {
    let graph = build_graph(&[], &FlowPolicy::default());

    assert!(graph.is_placeholder());
    assert_eq!(graph.step_count(), 0);
    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.edges().is_empty());

    let node = &graph.nodes()[0];
    assert_eq!(node.id, EMPTY_NODE_ID);
    assert_eq!(node.label(), PLACEHOLDER_LABEL);
    assert_eq!((node.position.x, node.position.y), (100.0, 100.0));
    assert_eq!(node.style.border.as_deref(), Some("2px dashed #6366f1"));
}

#[test]
fn test_chain_identities_and_endpoints() {
    let graph = build_graph(&valid_steps(6), &FlowPolicy::default());

    assert!(!graph.is_placeholder());
    assert_eq!(graph.nodes().len(), 6);
    assert_eq!(graph.edges().len(), 5);

    for (i, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.id, node_id(i));
        assert_eq!(node.position.x, i as f64 * 420.0);
    }
    for (i, edge) in graph.edges().iter().enumerate() {
        assert_eq!(edge.id, edge_id(i));
        assert_eq!(edge.source, node_id(i));
        assert_eq!(edge.target, node_id(i + 1));
        assert!(edge.animated);
        assert!(graph.node(&edge.source).is_some());
        assert!(graph.node(&edge.target).is_some());
    }
}

#[test]
fn test_labels_use_default_markers_cyclically() {
    let policy = FlowPolicy::builder().max_nodes(8).build().unwrap();
    let graph = build_graph(&valid_steps(8), &policy);
    let labels: Vec<_> = graph.nodes().iter().map(|n| n.label().to_string()).collect();

    assert_eq!(labels[0], "🧠 Step 1: Perform action number 1.");
    assert_eq!(labels[4], "📞 Step 5: Perform action number 5.");
    assert_eq!(labels[6], "✅ Step 7: Perform action number 7.");
    // Seven markers, so the eighth step wraps around to the first.
    assert_eq!(labels[7], "🧠 Step 8: Perform action number 8.");
}

#[test]
fn test_step_text_is_kept_verbatim() {
    let raw = vec!["Use <b>clean</b> water & soap.".to_string()];
    let graph = build_graph(&raw, &FlowPolicy::default());
    assert_eq!(graph.nodes()[0].label(), "🧠 Step 1: Use <b>clean</b> water & soap.");
}

#[test]
fn test_whitespace_only_steps_are_not_nodes() {
    let raw = vec!["   ".to_string(), "\t\n".to_string(), "Stay put.".to_string()];
    let graph = build_graph(&raw, &FlowPolicy::default());
    assert_eq!(graph.step_count(), 1);
    assert_eq!(graph.nodes()[0].label(), "🧠 Step 1: Stay put.");
}

#[test]
fn test_rebuild_is_identical() {
    let policy = FlowPolicy::default();
    let steps = StepFilter::new(&policy).filter(&noisy_steps());
    let builder = FlowGraphBuilder::new(&policy);
    assert_eq!(builder.build(&steps), builder.build(&steps));
}

#[test]
fn test_node_json_shape() {
    let raw = vec!["Turn off gas.".to_string(), "Leave.".to_string()];
    let graph = build_graph(&raw, &FlowPolicy::default());
    let value = serde_json::to_value(&graph).unwrap();

    assert_eq!(
        value["nodes"][1],
        json!({
            "id": "node-1",
            "data": { "label": "🧼 Step 2: Leave." },
            "position": { "x": 420.0, "y": 0.0 },
            "style": {
                "width": 360.0,
                "padding": "16px",
                "borderRadius": 14,
                "border": "2px solid #6366f1",
                "background": "#1e293b",
                "color": "#f1f5f9",
                "fontSize": "1rem",
                "fontWeight": 500,
                "textAlign": "left",
                "lineHeight": 1.6,
                "boxShadow": "0 6px 20px rgba(0,0,0,0.3)"
            }
        })
    );
}

#[test]
fn test_edge_json_shape() {
    let raw = vec!["Turn off gas.".to_string(), "Leave.".to_string()];
    let graph = build_graph(&raw, &FlowPolicy::default());
    let value = serde_json::to_value(&graph).unwrap();

    assert_eq!(
        value["edges"],
        json!([{
            "id": "edge-0",
            "source": "node-0",
            "target": "node-1",
            "animated": true,
            "type": "smoothstep",
            "style": { "stroke": "#6366f1" },
            "markerEnd": { "type": "arrowclosed" }
        }])
    );
}

#[test]
fn test_placeholder_json_omits_unset_style() {
    let graph = build_graph(&[], &FlowPolicy::default());
    let json = graph.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["nodes"][0]["id"], "empty");
    assert_eq!(value["edges"], json!([]));
    let style = value["nodes"][0]["style"].as_object().unwrap();
    assert!(!style.contains_key("width"));
    assert_eq!(style["padding"], "20px");
    assert_eq!(style["borderRadius"], 12);
}
