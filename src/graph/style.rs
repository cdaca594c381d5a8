use serde::{Deserialize, Serialize};

/// Accent colour shared by node borders and edge strokes.
pub const ACCENT: &str = "#6366f1";
const SURFACE: &str = "#1e293b";
const TEXT: &str = "#f1f5f9";

/// Visual descriptor for a node. Unset fields are left to the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl NodeStyle {
    /// Card style for a regular step node.
    pub fn step() -> Self {
        Self {
            width: Some(360.0),
            padding: Some("16px".to_string()),
            border_radius: Some(14),
            border: Some(format!("2px solid {}", ACCENT)),
            background: Some(SURFACE.to_string()),
            color: Some(TEXT.to_string()),
            font_size: Some("1rem".to_string()),
            font_weight: Some(500),
            text_align: Some("left".to_string()),
            line_height: Some(1.6),
            box_shadow: Some("0 6px 20px rgba(0,0,0,0.3)".to_string()),
        }
    }

    /// Dashed card shown when no step survived filtering.
    pub fn placeholder() -> Self {
        Self {
            padding: Some("20px".to_string()),
            border_radius: Some(12),
            border: Some(format!("2px dashed {}", ACCENT)),
            background: Some(SURFACE.to_string()),
            color: Some(TEXT.to_string()),
            ..Self::default()
        }
    }
}

/// Edge path shapes understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Default,
    Straight,
    Step,
    #[default]
    SmoothStep,
}

/// Arrow head drawn at an edge endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Arrow,
    #[default]
    ArrowClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeMarker {
    #[serde(rename = "type")]
    pub kind: MarkerKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub stroke: String,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            stroke: ACCENT.to_string(),
        }
    }
}
