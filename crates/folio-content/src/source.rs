//! The capability each mounted section reads through
//!
//! Sections never hold a store directly. They receive a [`ContentSource`],
//! which lets the page swap backends (or put a cache in front) without the
//! sections knowing.

use crate::content::{SectionContent, SocialLinks};
use crate::error::{ContentError, StoreError};
use crate::meta::{MetaTable, SectionMeta};
use crate::reader::{ContentReader, MetadataReader};
use crate::section::SectionId;
use crate::store::DocumentStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Read access to section content and metadata
#[async_trait]
pub trait ContentSource: Send + Sync + std::fmt::Debug {
    /// Read a section's content record
    ///
    /// # Errors
    /// Returns `ContentError` if the read or decode fails.
    async fn content(&self, section: SectionId) -> Result<Option<SectionContent>, ContentError>;

    /// Read one section's metadata, defaults on failure
    async fn meta(&self, section: SectionId) -> SectionMeta;

    /// Read every section's metadata in one pass, defaults on failure
    async fn meta_table(&self) -> MetaTable;

    /// Read the sidebar's social links
    ///
    /// # Errors
    /// Returns `StoreError` if the read fails.
    async fn social_links(&self) -> Result<SocialLinks, StoreError>;
}

/// [`ContentSource`] backed by a [`DocumentStore`]
#[derive(Debug, Clone)]
pub struct StoreContentSource {
    store: Arc<dyn DocumentStore>,
    content: ContentReader,
    metadata: MetadataReader,
}

impl StoreContentSource {
    /// Create source over a store
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            content: ContentReader::new(Arc::clone(&store)),
            metadata: MetadataReader::new(Arc::clone(&store)),
            store,
        }
    }

    /// Name of the backing store
    #[inline]
    #[must_use]
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }
}

#[async_trait]
impl ContentSource for StoreContentSource {
    async fn content(&self, section: SectionId) -> Result<Option<SectionContent>, ContentError> {
        self.content.read(section).await
    }

    async fn meta(&self, section: SectionId) -> SectionMeta {
        self.metadata.read(section).await
    }

    async fn meta_table(&self) -> MetaTable {
        self.metadata.read_all().await
    }

    async fn social_links(&self) -> Result<SocialLinks, StoreError> {
        self.content.read_social().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn delegates_to_readers() {
        let store = MemoryStore::from_bundle(json!({
            "content": {"hero": {"name": "Ada"}},
            "sections": {"skills": {"enabled": false}}
        }))
        .unwrap();
        let source = StoreContentSource::new(Arc::new(store));

        assert_eq!(source.store_name(), "memory");
        assert!(matches!(
            source.content(SectionId::Hero).await.unwrap(),
            Some(SectionContent::Hero(h)) if h.name == "Ada"
        ));
        assert!(!source.meta(SectionId::Skills).await.enabled);
        assert!(!source.meta_table().await.get(SectionId::Skills).enabled);
        assert!(source.social_links().await.unwrap().links.is_empty());
    }
}
