//! Document store access
//!
//! [`DocumentStore`] is the read API the site consumes. Backends:
//! - [`MemoryStore`]: in-process map, seeded from code or a bundle file
//! - [`FileStore`]: one JSON/YAML file per record under a directory tree
//! - [`FirestoreStore`]: Firestore REST documents API
//! - [`CachedStore`]: TTL cache in front of any other backend

mod cached;
mod file;
mod firestore;
mod memory;

pub use cached::CachedStore;
pub use file::FileStore;
pub use firestore::{decode_document, decode_value, FirestoreConfig, FirestoreStore};
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::record::Record;
use async_trait::async_trait;

/// Collection holding one content record per section
pub const CONTENT_COLLECTION: &str = "content";

/// Collection holding one display-metadata record per section
pub const SECTIONS_COLLECTION: &str = "sections";

/// Content record id for the social links sidebar
pub const SOCIAL_RECORD: &str = "social";

/// Read-only document store
///
/// Reads are independent and idempotent; implementations must not assume any
/// ordering between concurrent calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Short backend name for logging
    fn name(&self) -> &'static str;

    /// Read one record; `Ok(None)` when it does not exist
    async fn get_record(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError>;

    /// Read every record of a collection as `(id, record)` pairs
    ///
    /// A missing collection is an empty list, not an error.
    async fn list_records(&self, collection: &str) -> Result<Vec<(String, Record)>, StoreError>;
}
