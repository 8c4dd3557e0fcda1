//! Error types for the folio server
//!
//! - [`ConfigError`]: reading, parsing and validating `SiteConfig`
//! - [`ServerError`]: startup failures (config, store, bind, logging)
//!
//! Request handling itself never fails: read failures degrade sections and
//! delivery failures are reported inline on the page.

use folio_content::StoreError;
use std::path::PathBuf;

/// Configuration could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `SiteConfig`
    #[error("cannot parse config {path}: {source}")]
    Parse {
        /// File path
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// A setting has an unusable value
    #[error("invalid {key}: {message}")]
    Invalid {
        /// Setting name (file key or environment variable)
        key: String,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// Create invalid-value error
    pub fn invalid(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Check if the error is a rejected value rather than an unreadable file
    #[inline]
    #[must_use]
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

/// Server startup failed
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Content store could not be opened
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Listener could not be bound
    #[error("cannot bind {addr}: {source}")]
    Bind {
        /// Requested address
        addr: std::net::SocketAddr,
        /// Underlying error
        #[source]
        source: warp::Error,
    },

    /// Global subscriber already installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl ServerError {
    /// Check if the error comes from configuration
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
