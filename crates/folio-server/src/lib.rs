//! Folio Server - HTTP surface, configuration and logging for the site
//!
//! # Architecture
//!
//! ```text
//! SiteConfig (TOML + FOLIO_* env)
//!     ├→ open_store    → DocumentStore (files | bundle | firestore) [+ CachedStore]
//!     ├→ open_delivery → EmailDelivery (log | emailjs)
//!     └→ page_settings → PageComposer
//!                              │
//!                        warp routes: /, /contact, /api/sections, /healthz
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_server::{serve, SiteConfig};
//!
//! let config = SiteConfig::load(Some(Path::new("folio.toml")))?;
//! serve(config).await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;

// Re-exports for convenience
pub use config::{
    EmailBackend, EmailConfig, PresentationConfig, ServerConfig, SiteConfig, StoreBackend,
    StoreConfig,
};
pub use error::{ConfigError, ServerError};
pub use logging::init_logging;
pub use routes::{routes, AppState};
pub use server::{build_state, open_composer, open_delivery, open_store, serve};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
