//! In-process document store
//!
//! Backs tests and local runs. A bundle file holds every collection at once:
//!
//! ```yaml
//! content:
//!   about: { title: "About Me", paragraphs: ["..."] }
//! sections:
//!   about: { displayNumber: 1, enabled: true }
//! ```

use super::DocumentStore;
use crate::error::StoreError;
use crate::record::{into_record, Record};
use async_trait::async_trait;
use dashmap::DashMap;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

/// Document store held in memory
///
/// Collections keep insertion order, which is the order `list_records`
/// reports.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, IndexMap<String, Record>>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a record inserted
    #[must_use]
    pub fn with_record(self, collection: &str, id: &str, record: Record) -> Self {
        self.insert(collection, id, record);
        self
    }

    /// Insert or replace a record
    pub fn insert(&self, collection: &str, id: &str, record: Record) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), record);
    }

    /// Remove a record, returning it if present
    pub fn remove(&self, collection: &str, id: &str) -> Option<Record> {
        self.collections
            .get_mut(collection)
            .and_then(|mut records| records.shift_remove(id))
    }

    /// Number of records across all collections
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.iter().map(|c| c.value().len()).sum()
    }

    /// Check if the store holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build from a bundle value: `{collection: {id: record}}`
    ///
    /// # Errors
    /// - `StoreError::Decode` if the bundle or any record is not an object
    pub fn from_bundle(bundle: Value) -> Result<Self, StoreError> {
        let store = Self::new();
        for (collection, records) in into_record(bundle, "bundle")? {
            let location = format!("bundle/{collection}");
            for (id, record) in into_record(records, &location)? {
                let record = into_record(record, &format!("{location}/{id}"))?;
                store.insert(&collection, &id, record);
            }
        }
        Ok(store)
    }

    /// Load a bundle file (`.json`, `.yaml` or `.yml`)
    ///
    /// # Errors
    /// - `StoreError::Io` if the file cannot be read
    /// - `StoreError::UnsupportedFormat` for other extensions
    /// - `StoreError::Decode` if the content is not a valid bundle
    pub async fn load_bundle(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::io_error(path, e))?;
        let value = super::file::parse_document(path, &text)?;
        let store = Self::from_bundle(value)?;
        tracing::debug!(path = %path.display(), records = store.len(), "loaded content bundle");
        Ok(store)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get_record(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|records| records.get(id).cloned()))
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<(String, Record)>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .map(|(id, record)| (id.clone(), record.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        into_record(value, "test").unwrap()
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.get_record("content", "about").await.unwrap().is_none());
        assert!(store.list_records("sections").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_and_get() {
        let store = MemoryStore::new().with_record("content", "about", record(json!({"title": "Me"})));
        let got = store.get_record("content", "about").await.unwrap().unwrap();
        assert_eq!(got["title"], "Me");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryStore::new()
            .with_record("sections", "skills", record(json!({})))
            .with_record("sections", "about", record(json!({})))
            .with_record("sections", "contact", record(json!({})));
        let ids: Vec<String> = store
            .list_records("sections")
            .await
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["skills", "about", "contact"]);
    }

    #[tokio::test]
    async fn remove_record() {
        let store = MemoryStore::new().with_record("content", "hero", record(json!({"name": "X"})));
        assert!(store.remove("content", "hero").is_some());
        assert!(store.is_empty());
        assert!(store.remove("content", "hero").is_none());
    }

    #[test]
    fn bundle_rejects_non_object_records() {
        let err = MemoryStore::from_bundle(json!({"content": {"about": "nope"}})).unwrap_err();
        assert!(err.to_string().contains("bundle/content/about"));
    }

    #[tokio::test]
    async fn bundle_loads_collections() {
        let store = MemoryStore::from_bundle(json!({
            "content": {"about": {"title": "About"}},
            "sections": {"about": {"enabled": false}}
        }))
        .unwrap();
        assert_eq!(store.len(), 2);
        let meta = store.get_record("sections", "about").await.unwrap().unwrap();
        assert_eq!(meta["enabled"], false);
    }
}
