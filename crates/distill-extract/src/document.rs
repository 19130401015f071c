//! Document-level extraction.
//!
//! Normalizes the several shapes a Figma file response arrives in, extracts
//! the leading pages, and assembles the [`ExtractionResult`].

use distill_model::ExtractionResult;
use serde_json::Value;
use tracing::{debug, warn};

use crate::extractor::Extractor;
use crate::summary::summarize;

const UNTITLED: &str = "Untitled";

/// Find the document root in a file response.
///
/// Tried in order: `{ file: { document } }` (our own API wrapper),
/// `{ document }` (the REST response), a bare `DOCUMENT` node. Anything else
/// is used as-is, which usually yields no pages.
pub fn resolve_document(raw: &Value) -> &Value {
    if let Some(document) = raw.pointer("/file/document").filter(|d| d.is_object()) {
        return document;
    }
    if let Some(document) = raw.get("document").filter(|d| d.is_object()) {
        return document;
    }
    if raw.get("type").and_then(Value::as_str) == Some("DOCUMENT") {
        return raw;
    }

    let keys: Vec<&str> = raw
        .as_object()
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
    warn!(?keys, "no document found in file data, using input as document");
    raw
}

impl Extractor {
    /// Extract the leading pages of a file response and summarize them.
    ///
    /// Never fails. A response the engine cannot make sense of comes back
    /// with an empty `pages` list, which callers should treat as an unusable
    /// source.
    pub fn extract_essential_data(&self, raw: &Value) -> ExtractionResult {
        let document = resolve_document(raw);
        let page_nodes = document.get("children").and_then(Value::as_array);

        let mut pages = Vec::new();
        match page_nodes {
            Some(nodes) => {
                for page in nodes.iter().take(self.options().max_pages) {
                    match self.extract_node(page, self.options().max_depth, 0) {
                        Some(extracted) => pages.push(extracted),
                        None => {
                            let name = page.get("name").and_then(Value::as_str);
                            let node_type = page.get("type").and_then(Value::as_str);
                            warn!(name, node_type, "failed to extract page");
                        }
                    }
                }
            }
            None => warn!("no children found in document"),
        }

        // Read from the raw first page, not the extracted one: the page
        // background is reported even when extraction suppressed it.
        let canvas_background = page_nodes
            .and_then(|nodes| nodes.first())
            .and_then(|page| page.get("backgroundColor"))
            .filter(|color| !color.is_null())
            .cloned();

        let file_name = raw
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED)
            .to_owned();

        let summary = summarize(&pages);
        debug!(file_name = %file_name, %summary, "extracted document");

        ExtractionResult {
            file_name,
            canvas_background,
            pages,
            summary,
        }
    }
}
