//! Directory-backed persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use distill_model::ExtractionResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::{FileKey, StoreError};

const JSON_DIR: &str = "json";
const MINIMIZED_DIR: &str = "minimized";
const HTML_DIR: &str = "html";

/// A store rooted at one directory, keyed by Figma file key.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store, creating its subdirectories if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Store, StoreError> {
        let store = Store { root: root.into() };
        for dir in [JSON_DIR, MINIMIZED_DIR, HTML_DIR] {
            let path = store.root.join(dir);
            if !path.is_dir() {
                fs::create_dir_all(&path).map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "created store directory");
            }
        }
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // ---- raw file responses ----

    pub fn complete_path(&self, key: &FileKey) -> PathBuf {
        self.root.join(JSON_DIR).join(format!("{key}.json"))
    }

    /// Save a raw file response, returning the written path.
    pub fn save_complete(&self, data: &Value, key: &FileKey) -> Result<PathBuf, StoreError> {
        let path = self.complete_path(key);
        write_json(&path, data)?;
        info!(path = %path.display(), "saved complete JSON");
        Ok(path)
    }

    pub fn read_complete(&self, key: &FileKey) -> Result<Value, StoreError> {
        read_json(&self.complete_path(key))
    }

    pub fn complete_exists(&self, key: &FileKey) -> bool {
        self.complete_path(key).is_file()
    }

    // ---- extraction results ----

    pub fn minimized_path(&self, key: &FileKey) -> PathBuf {
        self.root.join(MINIMIZED_DIR).join(format!("{key}.json"))
    }

    /// Save an extraction result before compaction, returning the written path.
    pub fn save_minimized(
        &self,
        data: &ExtractionResult,
        key: &FileKey,
    ) -> Result<PathBuf, StoreError> {
        let path = self.minimized_path(key);
        write_json(&path, data)?;
        info!(path = %path.display(), "saved minimized JSON");
        Ok(path)
    }

    pub fn read_minimized(&self, key: &FileKey) -> Result<ExtractionResult, StoreError> {
        read_json(&self.minimized_path(key))
    }

    pub fn minimized_exists(&self, key: &FileKey) -> bool {
        self.minimized_path(key).is_file()
    }

    // ---- generated HTML ----

    /// Write a generated page as `<sanitized name>_<unix millis>.html`.
    pub fn save_html(&self, html: &str, name: &str) -> Result<PathBuf, StoreError> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let path = self
            .root
            .join(HTML_DIR)
            .join(format!("{}_{millis}.html", sanitize_name(name)));
        fs::write(&path, html).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "saved HTML");
        Ok(path)
    }

    /// Read a page previously written by [`Store::save_html`], by file name.
    pub fn read_html(&self, file_name: &str) -> Result<String, StoreError> {
        let path = self.root.join(HTML_DIR).join(file_name);
        fs::read_to_string(&path).map_err(|source| io_error(path, source))
    }

    /// File names of the saved pages, sorted.
    pub fn list_html(&self) -> Result<Vec<String>, StoreError> {
        let dir = self.root.join(HTML_DIR);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path: dir, source }),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".html") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Lowercase ASCII alphanumerics; everything else becomes `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(data).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| io_error(path.to_path_buf(), source))?;
    serde_json::from_str(&text).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn io_error(path: PathBuf, source: io::Error) -> StoreError {
    if source.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(path)
    } else {
        StoreError::Io { path, source }
    }
}
