//! Extraction configuration.
//!
//! Everything the engine used to hardcode (which node types to drop, how deep
//! to walk, how many pages and paints to keep) lives here, so callers can
//! tune it without touching the walk itself.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Node types dropped by default, together with their whole subtree.
///
/// These are vector and boolean geometry, or scaffolding with no visual
/// output, none of which a text-only consumer can rebuild from JSON.
pub const DEFAULT_SKIP_TYPES: &[&str] = &[
    "VECTOR",
    "BOOLEAN_OPERATION",
    "STAR",
    "POLYGON",
    "ELLIPSE",
    "REGULAR_POLYGON",
    "SLICE",
    "CONNECTOR",
    "WASHI_TAPE",
];

/// An immutable set of node type tags the extractor drops.
///
/// Builder methods return a new policy; a policy never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipPolicy {
    types: BTreeSet<String>,
}

impl SkipPolicy {
    /// A policy that keeps every node type.
    pub fn none() -> Self {
        Self {
            types: BTreeSet::new(),
        }
    }

    pub fn from_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// This policy, additionally dropping `node_type`.
    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.types.insert(node_type.into());
        self
    }

    /// This policy, no longer dropping `node_type`.
    pub fn without_type(mut self, node_type: &str) -> Self {
        self.types.remove(node_type);
        self
    }

    pub fn skips(&self, node_type: &str) -> bool {
        self.types.contains(node_type)
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }
}

impl Default for SkipPolicy {
    fn default() -> Self {
        Self::from_types(DEFAULT_SKIP_TYPES.iter().copied())
    }
}

/// Tunables for one extraction run.
///
/// Deserializes from a partial JSON object; missing fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Deepest level whose node is still emitted; pages are depth 0.
    pub max_depth: usize,
    /// Leading document children extracted as pages.
    pub max_pages: usize,
    pub max_fills: usize,
    pub max_strokes: usize,
    pub max_effects: usize,
    pub skip: SkipPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_pages: 3,
            max_fills: 1,
            max_strokes: 1,
            max_effects: 3,
            skip: SkipPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_policy_skips_vector_geometry() {
        let policy = SkipPolicy::default();
        for tag in DEFAULT_SKIP_TYPES {
            assert!(policy.skips(tag), "{tag} should be skipped");
        }
        assert!(!policy.skips("FRAME"));
        assert!(!policy.skips("TEXT"));
        assert!(!policy.skips("CANVAS"));
    }

    #[test]
    fn test_builders_do_not_touch_original() {
        let base = SkipPolicy::default();
        let extended = base.clone().with_type("TEXT");
        let relaxed = base.clone().without_type("ELLIPSE");

        assert!(extended.skips("TEXT"));
        assert!(!base.skips("TEXT"));
        assert!(!relaxed.skips("ELLIPSE"));
        assert!(base.skips("ELLIPSE"));
    }

    #[test]
    fn test_none_keeps_everything() {
        assert_eq!(SkipPolicy::none().types().count(), 0);
        assert!(!SkipPolicy::none().skips("VECTOR"));
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.max_depth, 10);
        assert_eq!(options.max_pages, 3);
        assert_eq!(options.max_fills, 1);
        assert_eq!(options.max_strokes, 1);
        assert_eq!(options.max_effects, 3);
        assert_eq!(options.skip, SkipPolicy::default());
    }

    #[test]
    fn test_partial_options_from_json() {
        let options: ExtractOptions =
            serde_json::from_str(r#"{ "maxDepth": 4, "skip": ["VECTOR", "TEXT"] }"#).unwrap();
        assert_eq!(options.max_depth, 4);
        assert_eq!(options.max_pages, 3);
        assert!(options.skip.skips("TEXT"));
        assert!(!options.skip.skips("ELLIPSE"));
    }
}
