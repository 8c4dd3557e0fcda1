//! Folio Content - document store access and typed section content
//!
//! The read side of the portfolio site:
//! - [`DocumentStore`]: `get_record` / `list_records` over a pluggable backend
//! - [`ContentReader`]: section content records decoded into typed values
//! - [`MetadataReader`]: per-section display metadata with defaults
//! - [`ContentSource`]: the capability each mounted section reads through
//!
//! # Architecture
//!
//! ```text
//! Firestore / files / memory → DocumentStore → (CachedStore) → ContentReader  ┐
//!                                                            → MetadataReader ┴→ ContentSource
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_content::{MemoryStore, SectionId, StoreContentSource, ContentSource};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::load_bundle("site.yaml").await?);
//! let source = StoreContentSource::new(store);
//!
//! let about = source.content(SectionId::About).await?;
//! let meta = source.meta(SectionId::About).await;
//! println!("about enabled: {}, ordinal: {}", meta.enabled, meta.display_number);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod content;
pub mod error;
pub mod meta;
pub mod reader;
pub mod record;
pub mod section;
pub mod source;
pub mod store;

// Re-exports for convenience
pub use content::{
    AboutContent, ExperienceContent, ExperienceEntry, HeroContent, Project, ProjectsContent,
    SectionContent, SkillCategory, SkillsContent, SocialLink, SocialLinks, Testimonial,
    TestimonialLink, TestimonialsContent,
};
pub use error::{ContentError, StoreError};
pub use meta::{MetaTable, SectionMeta};
pub use reader::{ContentReader, MetadataReader};
pub use record::Record;
pub use section::{ParseSectionError, SectionId};
pub use source::{ContentSource, StoreContentSource};
pub use store::{
    CachedStore, DocumentStore, FileStore, FirestoreConfig, FirestoreStore, MemoryStore,
    CONTENT_COLLECTION, SECTIONS_COLLECTION, SOCIAL_RECORD,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for reading site content
    pub use crate::{
        ContentError, ContentSource, DocumentStore, MetaTable, Record, SectionContent,
        SectionId, SectionMeta, StoreContentSource, StoreError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
