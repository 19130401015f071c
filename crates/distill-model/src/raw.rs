//! Lenient views over the raw Figma document.
//!
//! The REST API returns a loosely-typed tree whose fields vary by node type
//! and by API version. Rather than deserializing into a rigid struct (where a
//! single unexpected field shape would reject the whole file), the engine
//! reads through these borrowed views. Every accessor is total: a missing
//! field, an explicit `null`, or a value of the wrong JSON type all read as
//! `None`.

use std::ops::Deref;

use serde_json::{Map, Value};

use crate::color::Color;

/// A borrowed JSON object with typed, lenient field accessors.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    /// View `value` as a record. Returns `None` for anything but an object.
    pub fn new(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// The raw value of `key`, treating `null` as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    /// An owned copy of a string field.
    pub fn string(&self, key: &str) -> Option<String> {
        self.str(key).map(str::to_owned)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn array(&self, key: &str) -> Option<&'a [Value]> {
        self.get(key).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// A nested object field, viewed as a record.
    pub fn record(&self, key: &str) -> Option<Record<'a>> {
        self.get(key).and_then(Record::new)
    }

    pub fn color(&self, key: &str) -> Option<Color> {
        self.get(key).and_then(Color::from_value)
    }

    /// `false` only when `visible` is literally `false`; absent means visible.
    pub fn is_visible(&self) -> bool {
        self.bool("visible") != Some(false)
    }
}

/// A node of the raw design tree.
///
/// Dereferences to [`Record`] for field access; adds the identity fields and
/// the child list every node may carry.
#[derive(Debug, Clone, Copy)]
pub struct RawNode<'a> {
    record: Record<'a>,
}

impl<'a> RawNode<'a> {
    /// View `value` as a node. Returns `None` for null and non-object values,
    /// which carry no visual contribution.
    pub fn new(value: &'a Value) -> Option<Self> {
        Record::new(value).map(|record| Self { record })
    }

    pub fn id(&self) -> &'a str {
        self.record.str("id").unwrap_or_default()
    }

    /// The node's type tag, e.g. `FRAME` or `TEXT`.
    pub fn node_type(&self) -> &'a str {
        self.record.str("type").unwrap_or_default()
    }

    pub fn name(&self) -> &'a str {
        self.record.str("name").unwrap_or_default()
    }

    /// Child nodes; a non-array `children` field reads as absent.
    pub fn children(&self) -> Option<&'a [Value]> {
        self.record.array("children")
    }
}

impl<'a> Deref for RawNode<'a> {
    type Target = Record<'a>;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}
