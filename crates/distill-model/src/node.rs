//! Output tree of the extraction engine.
//!
//! `ExtractedNode` is a sparse record: apart from `id`, `type` and `name`,
//! every field is independently optional, and absence means "no value", never
//! "default value". Field declaration order is the serialization order.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::Color;

/// A pruned, render-relevant projection of one raw design node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,

    // Geometry, rounded to whole pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Fill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color_hex: Option<String>,

    // Auto-layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<String>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_left: Option<f64>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_right: Option<f64>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_top: Option<f64>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_bottom: Option<f64>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub item_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_sizing_mode: Option<String>,

    // Layout participation, independent of the node's own layout mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_sizing_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_sizing_vertical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<String>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub layout_grow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_wrap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_sizing_mode: Option<String>,

    // Typography, flattened out of `style`
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub letter_spacing: Option<f64>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_height_px: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_auto_resize: Option<String>,

    // Border
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Stroke>>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<String>,

    /// `[top-left, top-right, bottom-right, bottom-left]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radii: Option<[i64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clips_content: Option<bool>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub opacity: Option<f64>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ExtractedNode>>,
}

impl ExtractedNode {
    /// A node carrying only its identity fields.
    pub fn new(
        id: impl Into<String>,
        node_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Extracted children, empty when the field is absent.
    pub fn children(&self) -> &[ExtractedNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// A paint applied to a node's interior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(SolidFill),
    Gradient(GradientFill),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidFill {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Color,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub opacity: Option<f64>,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientFill {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub gradient_type: GradientType,
    pub gradient_stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GradientType {
    Linear,
    Radial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    pub hex: String,
    #[serde(serialize_with = "crate::number::serialize")]
    pub position: f64,
}

/// A solid border paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub color: Color,
    pub hex: String,
}

/// A shadow or blur, passed through without validating its type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub effect_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
    #[serde(
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub spread: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    #[serde(serialize_with = "crate::number::serialize")]
    pub x: f64,
    #[serde(serialize_with = "crate::number::serialize")]
    pub y: f64,
}

/// Responsive anchoring, e.g. `TOP` / `LEFT_RIGHT`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<String>,
}

/// Whole-document extraction output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub file_name: String,
    /// The first page's `backgroundColor`, copied verbatim from the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_background: Option<Value>,
    pub pages: Vec<ExtractedNode>,
    pub summary: Summary,
}

/// Node counts over the extracted pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_pages: usize,
    /// FRAME, COMPONENT and INSTANCE nodes.
    pub total_frames: usize,
    pub total_text_nodes: usize,
    pub total_rectangles: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages, {} frames, {} text nodes, {} rectangles",
            self.total_pages, self.total_frames, self.total_text_nodes, self.total_rectangles
        )
    }
}
