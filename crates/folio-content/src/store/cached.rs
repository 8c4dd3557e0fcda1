//! TTL cache in front of another document store
//!
//! Sections still issue their own reads; this decorator lets those reads share
//! results for a short window without the readers knowing. Failed reads are
//! never cached.

use super::DocumentStore;
use crate::error::StoreError;
use crate::record::Record;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Cached single-record reads (including cached absences)
    pub record_entries: u64,
    /// Cached collection listings
    pub list_entries: u64,
}

/// Caching decorator for any [`DocumentStore`]
#[derive(Debug, Clone)]
pub struct CachedStore {
    inner: Arc<dyn DocumentStore>,
    records: Cache<(String, String), Option<Record>>,
    lists: Cache<String, Arc<Vec<(String, Record)>>>,
}

impl CachedStore {
    /// Wrap `inner`, keeping entries for `ttl`
    #[must_use]
    pub fn new(inner: Arc<dyn DocumentStore>, ttl: Duration) -> Self {
        Self::with_capacity(inner, ttl, 1_000)
    }

    /// Wrap `inner` with explicit capacity
    #[must_use]
    pub fn with_capacity(inner: Arc<dyn DocumentStore>, ttl: Duration, max_capacity: u64) -> Self {
        Self {
            inner,
            records: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
            lists: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Drop every cached entry
    #[inline]
    pub fn invalidate_all(&self) {
        self.records.invalidate_all();
        self.lists.invalidate_all();
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            record_entries: self.records.entry_count(),
            list_entries: self.lists.entry_count(),
        }
    }
}

#[async_trait]
impl DocumentStore for CachedStore {
    fn name(&self) -> &'static str {
        "cached"
    }

    async fn get_record(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError> {
        let key = (collection.to_string(), id.to_string());
        if let Some(cached) = self.records.get(&key).await {
            return Ok(cached);
        }

        let fetched = self.inner.get_record(collection, id).await?;
        self.records.insert(key, fetched.clone()).await;
        Ok(fetched)
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<(String, Record)>, StoreError> {
        if let Some(cached) = self.lists.get(collection).await {
            return Ok(cached.as_ref().clone());
        }

        let fetched = Arc::new(self.inner.list_records(collection).await?);
        self.lists
            .insert(collection.to_string(), Arc::clone(&fetched))
            .await;
        Ok(fetched.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockDocumentStore;
    use serde_json::json;

    fn about() -> Record {
        json!({"title": "About"}).as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn second_read_hits_cache() {
        let mut inner = MockDocumentStore::new();
        inner
            .expect_get_record()
            .times(1)
            .returning(|_, _| Ok(Some(about())));

        let store = CachedStore::new(Arc::new(inner), Duration::from_secs(60));
        let first = store.get_record("content", "about").await.unwrap();
        let second = store.get_record("content", "about").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn absence_is_cached() {
        let mut inner = MockDocumentStore::new();
        inner.expect_get_record().times(1).returning(|_, _| Ok(None));

        let store = CachedStore::new(Arc::new(inner), Duration::from_secs(60));
        assert!(store.get_record("content", "skills").await.unwrap().is_none());
        assert!(store.get_record("content", "skills").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let mut inner = MockDocumentStore::new();
        let mut seq = mockall::Sequence::new();
        inner
            .expect_get_record()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(StoreError::decode("content/about", "boom")));
        inner
            .expect_get_record()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Some(about())));

        let store = CachedStore::new(Arc::new(inner), Duration::from_secs(60));
        assert!(store.get_record("content", "about").await.is_err());
        assert!(store.get_record("content", "about").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn lists_are_cached_per_collection() {
        let mut inner = MockDocumentStore::new();
        inner
            .expect_list_records()
            .times(1)
            .returning(|_| Ok(vec![("about".to_string(), about())]));

        let store = CachedStore::new(Arc::new(inner), Duration::from_secs(60));
        assert_eq!(store.list_records("sections").await.unwrap().len(), 1);
        assert_eq!(store.list_records("sections").await.unwrap().len(), 1);
    }
}
