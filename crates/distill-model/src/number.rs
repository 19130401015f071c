//! Serde helpers for numbers in the output tree.
//!
//! Figma hands out most numbers as JSON floats that happen to be whole
//! (`16`, `1`, `0`). `serde_json` would write an `f64` back as `16.0`, which
//! costs a token per value once the tree reaches the model. These helpers
//! write whole floats as integers and everything else unchanged.

use serde::Serializer;

/// Largest integer an `f64` represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize an `f64`, dropping the fractional part when it is zero.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// `Option<f64>` form of [`serialize`], for fields paired with
/// `skip_serializing_if = "Option::is_none"`.
pub fn serialize_opt<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serialize(v, serializer),
        None => serializer.serialize_none(),
    }
}
