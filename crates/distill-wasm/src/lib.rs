//! WASM bindings for the figma-distill engine.
//!
//! Exposes extraction, summaries, prompt assembly and file-key parsing to
//! JavaScript via wasm-bindgen. Functions taking file JSON throw on invalid
//! JSON; extraction itself never fails.

use distill_extract::{ExtractError, ExtractOptions, Extractor, Summary};
use distill_store::FileKey;
use wasm_bindgen::prelude::*;

/// Extract a Figma file JSON string and return the compact JSON string.
#[wasm_bindgen]
pub fn extract(json: &str) -> Result<String, JsError> {
    extract_compact(&Extractor::default(), json).map_err(|e| JsError::new(&e.to_string()))
}

/// Like `extract`, with a partial options object such as
/// `{ maxDepth: 4, skip: ["VECTOR"] }`.
#[wasm_bindgen(js_name = extractWithOptions)]
pub fn extract_with_options(json: &str, options: JsValue) -> Result<String, JsError> {
    let options: ExtractOptions = if options.is_undefined() || options.is_null() {
        ExtractOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {e}")))?
    };
    extract_compact(&Extractor::new(options), json).map_err(|e| JsError::new(&e.to_string()))
}

/// Node counts for a file.
///
/// Returns `{ totalPages, totalFrames, totalTextNodes, totalRectangles }`.
#[wasm_bindgen]
pub fn summary(json: &str) -> Result<JsValue, JsError> {
    let summary = summarize_source(json).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&summary).map_err(|e| JsError::new(&e.to_string()))
}

/// The full HTML-generation prompt for a file.
#[wasm_bindgen]
pub fn prompt(json: &str) -> Result<String, JsError> {
    let compact =
        extract_compact(&Extractor::default(), json).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(distill_extract::build_prompt(&compact))
}

/// The file key of a share URL or bare key, or `undefined`.
#[wasm_bindgen(js_name = fileKey)]
pub fn file_key(url: &str) -> Option<String> {
    FileKey::parse(url).ok().map(|key| key.to_string())
}

#[wasm_bindgen(js_name = isFigmaUrl)]
pub fn is_figma_url(url: &str) -> bool {
    distill_store::is_figma_url(url)
}

/// Get the engine version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn extract_compact(extractor: &Extractor, json: &str) -> Result<String, ExtractError> {
    let result = distill_extract::extract_str(extractor, json)?;
    distill_extract::to_compact_json(&result)
}

fn summarize_source(json: &str) -> Result<Summary, ExtractError> {
    Ok(distill_extract::extract_str(&Extractor::default(), json)?.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM): the pipeline behind each binding
    // =========================================================================

    const FILE: &str = r#"{
        "name": "Card",
        "document": {
            "type": "DOCUMENT",
            "children": [{
                "id": "0:1", "type": "CANVAS", "name": "Page",
                "children": [
                    { "id": "1", "type": "FRAME", "name": "Card", "children": [
                        { "id": "2", "type": "TEXT", "name": "Title", "characters": "Hi" },
                        { "id": "3", "type": "VECTOR", "name": "Icon" }
                    ]}
                ]
            }]
        }
    }"#;

    #[test]
    fn test_extract_compact() {
        let out = extract_compact(&Extractor::default(), FILE).unwrap();
        assert!(out.starts_with(r#"{"fileName":"Card","pages":[{"id":"0:1""#));
        assert!(out.contains(r#""characters":"Hi""#));
        assert!(!out.contains("VECTOR"));
    }

    #[test]
    fn test_extract_with_custom_options() {
        let options = ExtractOptions {
            skip: distill_extract::SkipPolicy::none(),
            ..ExtractOptions::default()
        };
        let out = extract_compact(&Extractor::new(options), FILE).unwrap();
        assert!(out.contains(r#""type":"VECTOR""#));
    }

    #[test]
    fn test_summary_counts() {
        let summary = summarize_source(FILE).unwrap();
        assert_eq!(
            summary,
            Summary {
                total_pages: 1,
                total_frames: 1,
                total_text_nodes: 1,
                total_rectangles: 0,
            }
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = extract_compact(&Extractor::default(), "{").unwrap_err();
        assert!(err.to_string().starts_with("Invalid file JSON"));
    }

    #[test]
    fn test_file_key() {
        assert_eq!(
            file_key("https://www.figma.com/design/Ab12/Site"),
            Some("Ab12".to_string())
        );
        assert_eq!(file_key("Ab12"), Some("Ab12".to_string()));
        assert_eq!(file_key("https://figma.com/proto/x-y"), None);
    }

    #[test]
    fn test_is_figma_url() {
        assert!(is_figma_url("https://figma.com/file/abc"));
        assert!(!is_figma_url("https://example.com/file/abc"));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_multiple_extracts() {
        let a = extract_compact(&Extractor::default(), FILE).unwrap();
        let b = extract_compact(&Extractor::default(), r#"{"name":"Other"}"#).unwrap();
        assert!(a.contains("Card"));
        assert!(!b.contains("Card"));
        assert!(b.contains("Other"));
    }
}
