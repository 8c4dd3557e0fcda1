//! Folio Sections - what each section shows and how it is numbered
//!
//! Everything here is synchronous and pure except contact delivery:
//! - [`resolve`]: `visible = enabled && has_content`
//! - [`assign_ordinals`]: heading numerals under one [`NumberingPolicy`]
//! - [`TabSelection`], [`GalleryView`], [`ContactView`]: per-section UI state
//! - [`render`]: HTML fragments for each section
//!
//! # Architecture
//!
//! ```text
//! SectionMeta + SectionContent → resolve → Visibility ┐
//!                                                     ├→ assign_ordinals → OrdinalFormat
//!                       UI state (tabs, reveal, form) ┴→ render::<section>::render → HTML
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_sections::{assign_ordinals, resolve, NumberingPolicy, NumberingSlot};
//!
//! let visibility = resolve(SectionId::About, &meta, content.as_ref());
//! let ordinals = assign_ordinals(
//!     NumberingPolicy::Positional,
//!     [NumberingSlot::new(SectionId::About, visibility, meta.display_number)],
//! );
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod contact;
pub mod gallery;
pub mod links;
pub mod numbering;
pub mod render;
pub mod social;
pub mod tabs;
pub mod theme;
pub mod visibility;

// Re-exports for convenience
pub use contact::{
    submit, ContactForm, ContactMessage, ContactStatus, DeliveryError, EmailDelivery, Submission,
};
pub use gallery::{project_key, GalleryView, RevealMode, COLLAPSED_COUNT};
pub use links::UiLinks;
pub use numbering::{assign_ordinals, NumberingPolicy, NumberingSlot, OrdinalFormat, UnknownVariant};
pub use render::contact::ContactView;
pub use social::SocialIcon;
pub use tabs::TabSelection;
pub use theme::{ThemeConfig, ThemeMode};
pub use visibility::{resolve, HasContent, Visibility};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for resolving and rendering sections
    pub use crate::{
        assign_ordinals, resolve, ContactForm, ContactStatus, ContactView, EmailDelivery,
        GalleryView, HasContent, NumberingPolicy, NumberingSlot, OrdinalFormat, RevealMode,
        TabSelection, ThemeConfig, UiLinks, Visibility,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
