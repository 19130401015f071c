//! figma-distill storage
//!
//! Local persistence around the extraction engine: Figma file keys, and a
//! directory store for raw responses, extraction results and generated HTML.
//!
//! ```text
//! <root>/json/<key>.json        raw file response
//! <root>/minimized/<key>.json   extraction result
//! <root>/html/<name>_<ms>.html  generated pages
//! ```

pub mod file_key;
pub mod store;

pub use file_key::{is_figma_url, FileKey};
pub use store::Store;

use std::path::PathBuf;

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a Figma file URL or key: {0:?}")]
    InvalidKey(String),
}
