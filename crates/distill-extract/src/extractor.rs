//! Node-level extraction.
//!
//! Walks one raw node and its descendants, copying the render-relevant fields
//! into an [`ExtractedNode`]. Each field rule stands alone: a rule never reads
//! or undoes what an earlier one wrote, and a missing or malformed field only
//! means that field is left out.

use distill_model::{js_round, Constraints, ExtractedNode, RawNode, Record};
use serde_json::Value;
use tracing::trace;

use crate::options::ExtractOptions;
use crate::paint;

/// The extraction engine, configured once and reusable across calls.
///
/// Holds no per-call state, so one instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract `value` sitting at `current_depth` of a walk bounded by
    /// `max_depth`.
    ///
    /// Returns `None` when `value` is not an object, when it lies below the
    /// depth ceiling, or when its type is skipped. Any other node is returned,
    /// even with nothing but its identity: empty containers still shape the
    /// tree.
    ///
    /// A node exactly at `max_depth` is emitted without `children`, which reads
    /// the same as a leaf.
    pub fn extract_node(
        &self,
        value: &Value,
        max_depth: usize,
        current_depth: usize,
    ) -> Option<ExtractedNode> {
        let node = RawNode::new(value)?;

        if current_depth > max_depth {
            return None;
        }

        if self.options.skip.skips(node.node_type()) {
            trace!(id = node.id(), node_type = node.node_type(), "skipping node");
            return None;
        }

        let mut out = ExtractedNode::new(node.id(), node.node_type(), node.name());

        geometry(&node, &mut out);
        out.characters = node.string("characters");
        out.fills = paint::fills(&node, self.options.max_fills);
        background_color(&node, &mut out);
        auto_layout(&node, &mut out);
        layout_participation(&node, &mut out);
        if let Some(style) = node.record("style") {
            typography(&style, &mut out);
        }
        self.strokes(&node, &mut out);
        corners(&node, &mut out);
        out.clips_content = node.bool("clipsContent");
        out.opacity = node.number("opacity").filter(|&o| o != 1.0);
        out.rotation = node.number("rotation").filter(|&r| r != 0.0);
        out.effects = paint::effects(&node, self.options.max_effects);
        out.constraints = node.record("constraints").map(|c| Constraints {
            vertical: c.string("vertical"),
            horizontal: c.string("horizontal"),
        });

        if let Some(children) = node.children().filter(|c| !c.is_empty()) {
            if current_depth < max_depth {
                out.children = Some(
                    children
                        .iter()
                        .filter_map(|child| self.extract_node(child, max_depth, current_depth + 1))
                        .collect(),
                );
            }
        }

        Some(out)
    }

    fn strokes(&self, node: &RawNode<'_>, out: &mut ExtractedNode) {
        let Some(strokes) = paint::strokes(node, self.options.max_strokes) else {
            return;
        };
        out.strokes = Some(strokes);
        out.stroke_weight = node.number("strokeWeight");
        out.stroke_align = node.string("strokeAlign");
    }
}

/// Round to a whole pixel, halves toward positive infinity.
fn px(value: f64) -> i64 {
    js_round(value) as i64
}

/// Position and size from the first available source: the absolute bounding
/// box, the absolute render bounds, then plain `x`/`y`. Sources never mix.
fn geometry(node: &RawNode<'_>, out: &mut ExtractedNode) {
    let bounds = node
        .record("absoluteBoundingBox")
        .or_else(|| node.record("absoluteRenderBounds"));

    if let Some(bounds) = bounds {
        out.x = bounds.number("x").map(px);
        out.y = bounds.number("y").map(px);
        out.width = bounds.number("width").map(px);
        out.height = bounds.number("height").map(px);
    } else if let (Some(x), Some(y)) = (node.number("x"), node.number("y")) {
        out.x = Some(px(x));
        out.y = Some(px(y));
        out.width = node.number("width").map(px);
        out.height = node.number("height").map(px);
    }
}

fn background_color(node: &RawNode<'_>, out: &mut ExtractedNode) {
    // Transparent black is Figma's "unset" value.
    if let Some(color) = node
        .color("backgroundColor")
        .filter(|c| !c.is_transparent_black())
    {
        out.background_color_hex = Some(color.hex());
        out.background_color = Some(color);
    }
}

fn auto_layout(node: &RawNode<'_>, out: &mut ExtractedNode) {
    let Some(mode) = node.string("layoutMode") else {
        return;
    };
    out.layout_mode = Some(mode);
    out.padding_left = node.number("paddingLeft");
    out.padding_right = node.number("paddingRight");
    out.padding_top = node.number("paddingTop");
    out.padding_bottom = node.number("paddingBottom");
    out.item_spacing = node.number("itemSpacing");
    out.counter_axis_align_items = node.string("counterAxisAlignItems");
    out.primary_axis_sizing_mode = node.string("primaryAxisSizingMode");
}

/// How a node sits inside its parent's layout. Children of auto-layout
/// frames carry these without a `layoutMode` of their own.
fn layout_participation(node: &RawNode<'_>, out: &mut ExtractedNode) {
    out.layout_sizing_horizontal = node.string("layoutSizingHorizontal");
    out.layout_sizing_vertical = node.string("layoutSizingVertical");
    out.layout_align = node.string("layoutAlign");
    out.layout_grow = node.number("layoutGrow");
    out.layout_wrap = node.string("layoutWrap");
    out.primary_axis_align_items = node.string("primaryAxisAlignItems");
    out.counter_axis_sizing_mode = node.string("counterAxisSizingMode");
}

fn typography(style: &Record<'_>, out: &mut ExtractedNode) {
    out.font_size = style.number("fontSize");
    out.font_family = style.string("fontFamily");
    out.font_weight = style.number("fontWeight");
    out.text_align_horizontal = style.string("textAlignHorizontal");
    out.text_align_vertical = style.string("textAlignVertical");
    out.letter_spacing = style.number("letterSpacing");
    out.line_height_px = style.number("lineHeightPx");
    out.text_auto_resize = style.string("textAutoResize");
}

/// Per-corner radii win over the uniform radius.
fn corners(node: &RawNode<'_>, out: &mut ExtractedNode) {
    if let Some(radii) = node.array("rectangleCornerRadii").and_then(corner_radii) {
        out.corner_radii = Some(radii);
    } else if let Some(radius) = node.number("cornerRadius") {
        out.corner_radius = Some(px(radius));
    }
}

fn corner_radii(values: &[Value]) -> Option<[i64; 4]> {
    let [tl, tr, br, bl, ..] = values else {
        return None;
    };
    let radius = |v: &Value| v.as_f64().map(px);
    Some([radius(tl)?, radius(tr)?, radius(br)?, radius(bl)?])
}
