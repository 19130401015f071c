//! Compaction: serialization without empty values.
//!
//! Every `null`, empty array and empty object is left out, at every depth.
//! Pruning runs bottom-up, so a container whose members all pruned away is
//! left out too, and no empty value of any kind survives into the output.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::ExtractError;

/// Serialize `data` to a single-line JSON string with empty values removed.
///
/// `data` is only read. If nothing survives pruning, the output is `null`.
pub fn to_compact_json<T>(data: &T) -> Result<String, ExtractError>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(data).map_err(ExtractError::Serialize)?;
    let compact = compact_value(value).unwrap_or(Value::Null);
    serde_json::to_string(&compact).map_err(ExtractError::Serialize)
}

/// Prune empty values out of an arbitrary JSON value.
///
/// Returns `None` when the value itself is empty after pruning. Array
/// elements that prune away are removed, shifting later elements down.
pub fn compact_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Array(items) => {
            let items: Vec<Value> = items.into_iter().filter_map(compact_value).collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        Value::Object(fields) => {
            let fields: Map<String, Value> = fields
                .into_iter()
                .filter_map(|(key, value)| compact_value(value).map(|value| (key, value)))
                .collect();
            (!fields.is_empty()).then_some(Value::Object(fields))
        }
        other => Some(other),
    }
}
