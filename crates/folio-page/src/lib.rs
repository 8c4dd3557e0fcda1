//! Folio Page - mounting, composing and rendering the portfolio page
//!
//! A page view mounts one fetch task per section, resolves what each
//! section shows, numbers the visible ones and wraps them in the document
//! shell:
//! - [`MountedPage`]: in-flight fetches and their result slots
//! - [`PageSnapshot`]: resolved visibility and ordinals at one instant
//! - [`PageComposer`]: mount, wait up to the render budget, render
//! - [`PageQuery`]: per-request UI state in the query string
//!
//! # Architecture
//!
//! ```text
//! ContentSource ─┬→ hero task ────────────────────────────┐
//!                ├→ social task ──────────────────────────┤
//!                └→ meta_table gate ─→ section tasks (6) ─┴→ watch slots
//!                                                                 │
//!                          PageComposer ← PageSnapshot ← MountedPage::snapshot
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_page::{PageComposer, PageQuery, PageSettings};
//!
//! let composer = PageComposer::new(source, PageSettings::default());
//! let html = composer.render(&PageQuery::default(), None).await;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod composer;
pub mod delivery;
pub mod mount;
pub mod query;
pub mod shell;
pub mod slot;
pub mod snapshot;

// Re-exports for convenience
pub use composer::{PageComposer, PageSettings, DEFAULT_RENDER_BUDGET};
pub use delivery::{EmailJsConfig, EmailJsDelivery, LogOnlyDelivery};
pub use mount::{MetadataStrategy, MountedPage};
pub use query::PageQuery;
pub use shell::{Owner, GATE_LABEL};
pub use slot::{load_section, SectionOutcome, Slot, SlotSender};
pub use snapshot::{PageSnapshot, SectionRow, SectionView};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for composing pages
    pub use crate::{
        MetadataStrategy, MountedPage, Owner, PageComposer, PageQuery, PageSettings,
        PageSnapshot, SectionView,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
