//! RGBA colors and hex conversion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An RGBA color with channels in the 0–1 range, as Figma stores them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(serialize_with = "crate::number::serialize")]
    pub r: f64,
    #[serde(serialize_with = "crate::number::serialize")]
    pub g: f64,
    #[serde(serialize_with = "crate::number::serialize")]
    pub b: f64,
    /// Absent when the source color carried no alpha; written back the same way.
    #[serde(
        default,
        serialize_with = "crate::number::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub a: Option<f64>,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// A color with no alpha channel.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// Read a color out of a raw JSON value.
    ///
    /// `r`, `g` and `b` must be numbers; `a` is kept only when numeric.
    /// Anything else yields `None` so the caller can drop the paint that
    /// carried it.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let channel = |key: &str| obj.get(key).and_then(Value::as_f64);
        Some(Self {
            r: channel("r")?,
            g: channel("g")?,
            b: channel("b")?,
            a: channel("a"),
        })
    }

    /// `#RRGGBB` for this color; alpha is not encoded.
    pub fn hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Fully transparent black, the value Figma reports for "no background".
    ///
    /// A missing alpha counts as transparent.
    pub fn is_transparent_black(&self) -> bool {
        let alpha = self.a.unwrap_or(0.0);
        !(alpha > 0.0 || self.r != 0.0 || self.g != 0.0 || self.b != 0.0)
    }
}

/// Round half toward positive infinity: `2.5 → 3`, `-2.5 → -2`.
///
/// `f64::round` rounds half away from zero, which disagrees on negative
/// halves. Figma coordinates are often negative, so the distinction shows.
pub fn js_round(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Convert 0–1 RGB channels to an uppercase `#RRGGBB` string.
///
/// Channels are not clamped. A channel above 1 produces more than two hex
/// digits (`1.2 → 306 → "132"`) and a negative channel keeps its sign
/// (`-0.02 → -5 → "-5"`); such input is passed through as observed.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let mut hex = String::with_capacity(7);
    hex.push('#');
    for channel in [r, g, b] {
        hex.push_str(&channel_hex(js_round(channel * 255.0) as i64));
    }
    hex
}

fn channel_hex(value: i64) -> String {
    let digits = if value < 0 {
        format!("-{:X}", value.unsigned_abs())
    } else {
        format!("{value:X}")
    };
    format!("{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    // =========================================================================
    // rgb_to_hex
    // =========================================================================

    #[test]
    fn test_primary_colors() {
        assert_eq!(rgb_to_hex(1.0, 0.0, 0.0), "#FF0000");
        assert_eq!(rgb_to_hex(0.0, 1.0, 0.0), "#00FF00");
        assert_eq!(rgb_to_hex(0.0, 0.0, 1.0), "#0000FF");
    }

    #[test]
    fn test_black_and_white() {
        assert_eq!(rgb_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(rgb_to_hex(1.0, 1.0, 1.0), "#FFFFFF");
    }

    #[test]
    fn test_single_digit_channel_is_padded() {
        // 0.02 * 255 = 5.1 → 5
        assert_eq!(rgb_to_hex(0.02, 0.02, 0.02), "#050505");
    }

    #[test]
    fn test_half_rounds_up() {
        // 0.5 * 255 = 127.5 → 128
        assert_eq!(rgb_to_hex(0.5, 0.5, 0.5), "#808080");
    }

    #[test]
    fn test_out_of_range_not_clamped() {
        assert_eq!(rgb_to_hex(1.2, 0.0, 0.0), "#1320000");
    }

    #[test]
    fn test_negative_channel_keeps_sign() {
        assert_eq!(rgb_to_hex(-0.02, 0.0, 0.0), "#-50000");
    }

    #[test]
    fn test_tiny_negative_rounds_to_zero() {
        assert_eq!(rgb_to_hex(-0.001, 0.0, 0.0), "#000000");
    }

    proptest! {
        #[test]
        fn prop_hex_is_well_formed(r in 0.0f64..=1.0, g in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let hex = rgb_to_hex(r, g, b);
            prop_assert_eq!(hex.len(), 7);
            prop_assert!(hex.starts_with('#'));
            prop_assert!(hex[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
            prop_assert_eq!(rgb_to_hex(r, g, b), hex);
        }
    }

    // =========================================================================
    // js_round
    // =========================================================================

    #[test]
    fn test_js_round_halves() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(10.4), 10.0);
        assert_eq!(js_round(20.6), 21.0);
        assert_eq!(js_round(-0.4), 0.0);
    }

    // =========================================================================
    // Color
    // =========================================================================

    #[test]
    fn test_from_value() {
        let color = Color::from_value(&json!({ "r": 1, "g": 0.5, "b": 0, "a": 0.25 }));
        assert_eq!(color, Some(Color::new(1.0, 0.5, 0.0, 0.25)));
    }

    #[test]
    fn test_from_value_missing_alpha_stays_missing() {
        let color = Color::from_value(&json!({ "r": 0, "g": 0, "b": 0 })).unwrap();
        assert_eq!(color, Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(serde_json::to_value(color).unwrap(), json!({ "r": 0, "g": 0, "b": 0 }));
    }

    #[test]
    fn test_from_value_rejects_malformed() {
        assert_eq!(Color::from_value(&json!({ "r": 1, "g": 0 })), None);
        assert_eq!(Color::from_value(&json!({ "r": "1", "g": 0, "b": 0 })), None);
        assert_eq!(Color::from_value(&json!([1, 0, 0])), None);
        assert_eq!(Color::from_value(&Value::Null), None);
    }

    #[test]
    fn test_transparent_black() {
        assert!(Color::new(0.0, 0.0, 0.0, 0.0).is_transparent_black());
        assert!(!Color::new(0.0, 0.0, 0.0, 1.0).is_transparent_black());
        assert!(!Color::new(0.1, 0.0, 0.0, 0.0).is_transparent_black());
        assert!(Color::rgb(0.0, 0.0, 0.0).is_transparent_black());
        assert!(!Color::rgb(0.0, 0.0, 0.2).is_transparent_black());
    }

    #[test]
    fn test_serializes_whole_channels_as_integers() {
        let json = serde_json::to_string(&Color::new(1.0, 0.5, 0.0, 1.0)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":0.5,"b":0,"a":1}"#);
    }
}
