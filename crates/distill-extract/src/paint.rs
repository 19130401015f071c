//! Fills, strokes and effects.
//!
//! Each function filters the raw paint list, converts the survivors into
//! output shapes with their hex colors pre-computed, and truncates to the
//! configured limit. An empty result is `None`, so the field is omitted.

use distill_model::{
    Effect, Fill, GradientFill, GradientStop, GradientType, Offset, RawNode, Record, SolidFill,
    Stroke,
};
use serde_json::Value;

const SOLID: &str = "SOLID";
const GRADIENT_LINEAR: &str = "GRADIENT_LINEAR";
const GRADIENT_RADIAL: &str = "GRADIENT_RADIAL";

/// Visible solid and gradient paints from `fills`, then `background`.
///
/// The two lists come from different places in Figma's model (node paint vs.
/// container background) but share a shape, so they are merged in that fixed
/// order before filtering.
pub(crate) fn fills(node: &RawNode<'_>, limit: usize) -> Option<Vec<Fill>> {
    let paints = node.array("fills").unwrap_or_default();
    let background = node.array("background").unwrap_or_default();

    let fills: Vec<Fill> = paints
        .iter()
        .chain(background)
        .filter_map(Record::new)
        .filter(Record::is_visible)
        .filter_map(fill)
        .take(limit)
        .collect();

    non_empty(fills)
}

fn fill(paint: Record<'_>) -> Option<Fill> {
    match paint.str("type")? {
        SOLID => {
            let color = paint.color("color")?;
            Some(Fill::Solid(SolidFill {
                paint_type: SOLID.into(),
                hex: color.hex(),
                color,
                opacity: paint.number("opacity"),
            }))
        }
        kind @ (GRADIENT_LINEAR | GRADIENT_RADIAL) => {
            let stops = paint.array("gradientStops")?;
            let gradient_type = if kind == GRADIENT_LINEAR {
                GradientType::Linear
            } else {
                GradientType::Radial
            };
            Some(Fill::Gradient(GradientFill {
                paint_type: kind.into(),
                gradient_type,
                gradient_stops: stops.iter().filter_map(gradient_stop).collect(),
            }))
        }
        _ => None,
    }
}

fn gradient_stop(value: &Value) -> Option<GradientStop> {
    let stop = Record::new(value)?;
    let color = stop.color("color")?;
    Some(GradientStop {
        hex: color.hex(),
        color,
        position: stop.number("position")?,
    })
}

/// Visible solid strokes that carry a color.
pub(crate) fn strokes(node: &RawNode<'_>, limit: usize) -> Option<Vec<Stroke>> {
    let strokes: Vec<Stroke> = node
        .array("strokes")
        .unwrap_or_default()
        .iter()
        .filter_map(Record::new)
        .filter(|paint| paint.str("type") == Some(SOLID) && paint.is_visible())
        .filter_map(|paint| {
            let color = paint.color("color")?;
            Some(Stroke {
                paint_type: SOLID.into(),
                hex: color.hex(),
                color,
            })
        })
        .take(limit)
        .collect();

    non_empty(strokes)
}

/// Visible effects, fields passed through as-is.
pub(crate) fn effects(node: &RawNode<'_>, limit: usize) -> Option<Vec<Effect>> {
    let effects: Vec<Effect> = node
        .array("effects")
        .unwrap_or_default()
        .iter()
        .filter_map(Record::new)
        .filter(Record::is_visible)
        .map(|effect| Effect {
            effect_type: effect.string("type"),
            visible: effect.bool("visible"),
            radius: effect.number("radius"),
            color: effect.color("color"),
            offset: effect.record("offset").and_then(offset),
            spread: effect.number("spread"),
        })
        .take(limit)
        .collect();

    non_empty(effects)
}

fn offset(record: Record<'_>) -> Option<Offset> {
    Some(Offset {
        x: record.number("x")?,
        y: record.number("y")?,
    })
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
