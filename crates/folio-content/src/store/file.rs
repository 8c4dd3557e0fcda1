//! Directory-backed document store
//!
//! Layout: `<root>/<collection>/<id>.{json,yaml,yml}`. Files are read on every
//! call so edits show up without a restart.

use super::DocumentStore;
use crate::error::StoreError;
use crate::record::{into_record, Record};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Document store over a directory tree
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create store rooted at `root`
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn find_record_path(&self, collection: &str, id: &str) -> Option<PathBuf> {
        let dir = self.root.join(collection);
        for ext in EXTENSIONS {
            let candidate = dir.join(format!("{id}.{ext}"));
            if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Parse a JSON or YAML document by file extension
///
/// # Errors
/// - `StoreError::UnsupportedFormat` for unknown extensions
/// - `StoreError::Decode` on syntax errors
pub(crate) fn parse_document(path: &Path, text: &str) -> Result<Value, StoreError> {
    let location = path.display().to_string();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(text).map_err(|e| StoreError::decode(location, e)),
        Some("yaml" | "yml") => {
            serde_yaml::from_str(text).map_err(|e| StoreError::decode(location, e))
        }
        other => Err(StoreError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

async fn read_record(path: &Path) -> Result<Record, StoreError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| StoreError::io_error(path, e))?;
    let value = parse_document(path, &text)?;
    into_record(value, &path.display().to_string())
}

#[async_trait]
impl DocumentStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn get_record(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError> {
        match self.find_record_path(collection, id).await {
            Some(path) => read_record(&path).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<(String, Record)>, StoreError> {
        let dir = self.root.join(collection);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io_error(&dir, e)),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io_error(&dir, e))?
        {
            let path = entry.path();
            let known = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| EXTENSIONS.contains(&e));
            if known {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(id) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                continue;
            };
            if records.iter().any(|(seen, _): &(String, Record)| *seen == id) {
                tracing::debug!(path = %path.display(), "duplicate record id, keeping first");
                continue;
            }
            records.push((id, read_record(&path).await?));
        }
        Ok(records)
    }
}
