//! Section content and metadata readers
//!
//! Both readers sit directly on a [`DocumentStore`]. The content reader
//! reports failures so the caller can hide the section; the metadata reader
//! never fails outward and substitutes defaults instead.

use crate::content::{SectionContent, SocialLinks};
use crate::error::{ContentError, StoreError};
use crate::meta::{MetaTable, SectionMeta};
use crate::section::SectionId;
use crate::store::{DocumentStore, CONTENT_COLLECTION, SECTIONS_COLLECTION, SOCIAL_RECORD};
use serde_json::Value;
use std::sync::Arc;

/// Reads section content records from the `content` collection
#[derive(Debug, Clone)]
pub struct ContentReader {
    store: Arc<dyn DocumentStore>,
}

impl ContentReader {
    /// Create reader over a store
    #[inline]
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Read and decode a section's content record
    ///
    /// `Ok(None)` means the record is absent. Contact has no content record
    /// and always reads as absent without touching the store.
    ///
    /// # Errors
    /// - `ContentError::Store` if the store read fails
    /// - `ContentError::Decode` if the record does not have the section's shape
    pub async fn read(&self, section: SectionId) -> Result<Option<SectionContent>, ContentError> {
        if !section.has_content_record() {
            return Ok(None);
        }

        let record = self
            .store
            .get_record(CONTENT_COLLECTION, section.key())
            .await
            .map_err(|e| ContentError::store(section, e))?;

        match record {
            Some(record) => {
                tracing::debug!(%section, fields = record.len(), "content record loaded");
                SectionContent::decode(section, record).map(Some)
            }
            None => {
                tracing::debug!(%section, "content record absent");
                Ok(None)
            }
        }
    }

    /// Read the sidebar's social links record
    ///
    /// An absent record reads as no links.
    ///
    /// # Errors
    /// - `StoreError` if the read fails or the record is malformed
    pub async fn read_social(&self) -> Result<SocialLinks, StoreError> {
        let Some(record) = self
            .store
            .get_record(CONTENT_COLLECTION, SOCIAL_RECORD)
            .await?
        else {
            return Ok(SocialLinks::default());
        };

        serde_json::from_value(Value::Object(record))
            .map_err(|e| StoreError::decode(format!("{CONTENT_COLLECTION}/{SOCIAL_RECORD}"), e))
    }
}

/// Reads display metadata from the `sections` collection
#[derive(Debug, Clone)]
pub struct MetadataReader {
    store: Arc<dyn DocumentStore>,
}

impl MetadataReader {
    /// Create reader over a store
    #[inline]
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Read one section's metadata, reporting store failures
    ///
    /// # Errors
    /// - `StoreError` if the store read fails
    pub async fn try_read(&self, section: SectionId) -> Result<SectionMeta, StoreError> {
        if !section.has_metadata() {
            return Ok(SectionMeta::defaults(section));
        }

        let record = self
            .store
            .get_record(SECTIONS_COLLECTION, section.key())
            .await?;
        Ok(SectionMeta::from_record(section, record.as_ref()))
    }

    /// Read one section's metadata, defaults on failure
    pub async fn read(&self, section: SectionId) -> SectionMeta {
        match self.try_read(section).await {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!(%section, error = %e, "metadata read failed, using defaults");
                SectionMeta::defaults(section)
            }
        }
    }

    /// Read the whole metadata collection in one listing
    ///
    /// # Errors
    /// - `StoreError` if the listing fails
    pub async fn try_read_all(&self) -> Result<MetaTable, StoreError> {
        let records = self.store.list_records(SECTIONS_COLLECTION).await?;
        let table = MetaTable::from_records(records.iter().map(|(id, r)| (id.as_str(), r)));
        tracing::debug!(records = table.len(), "section metadata loaded");
        Ok(table)
    }

    /// Read the whole metadata collection, defaults on failure
    pub async fn read_all(&self) -> MetaTable {
        match self.try_read_all().await {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, "bulk metadata read failed, using defaults");
                MetaTable::new()
            }
        }
    }
}
