//! figma-distill extraction engine
//!
//! Turns a raw Figma file response into a pruned, LLM-ready tree, then into a
//! compact string. Extraction never fails: unexpected input shapes degrade to
//! missing fields or an empty page list.
//!
//! ```text
//! file JSON → extract_essential_data() → ExtractionResult → to_compact_json() → String
//! ```
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let file = json!({
//!     "name": "Landing",
//!     "document": {
//!         "type": "DOCUMENT",
//!         "children": [{ "id": "0:1", "type": "CANVAS", "name": "Page 1" }]
//!     }
//! });
//! let result = distill_extract::extract_essential_data(&file);
//! assert_eq!(result.summary.total_pages, 1);
//!
//! let compact = distill_extract::to_compact_json(&result).unwrap();
//! assert!(compact.starts_with(r#"{"fileName":"Landing""#));
//! ```

// Nested `json!` fixtures in the tests expand past the default limit.
#![recursion_limit = "256"]

pub mod compact;
pub mod document;
pub mod extractor;
pub mod options;
mod paint;
pub mod prompt;
pub mod summary;

pub use compact::{compact_value, to_compact_json};
pub use distill_model::{rgb_to_hex, Color, ExtractedNode, ExtractionResult, Summary};
pub use document::resolve_document;
pub use extractor::Extractor;
pub use options::{ExtractOptions, SkipPolicy, DEFAULT_SKIP_TYPES};
pub use prompt::build_prompt;
pub use summary::{summarize, NodeCounts};

use serde_json::Value;

/// Extraction and compaction errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid file JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Extract one node with the default options.
pub fn extract_node(
    node: &Value,
    max_depth: usize,
    current_depth: usize,
) -> Option<ExtractedNode> {
    Extractor::default().extract_node(node, max_depth, current_depth)
}

/// Extract a whole file response with the default options.
pub fn extract_essential_data(raw: &Value) -> ExtractionResult {
    Extractor::default().extract_essential_data(raw)
}

/// Parse file JSON text and extract it.
pub fn extract_str(
    extractor: &Extractor,
    source: &str,
) -> Result<ExtractionResult, ExtractError> {
    let raw: Value = serde_json::from_str(source).map_err(ExtractError::Parse)?;
    Ok(extractor.extract_essential_data(&raw))
}
