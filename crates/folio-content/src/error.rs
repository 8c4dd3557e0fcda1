//! Error types for content access
//!
//! Two layers:
//! - [`StoreError`]: the document store could not produce a record
//! - [`ContentError`]: a section's content could not be read or decoded

use crate::section::SectionId;
use std::path::PathBuf;

/// Errors raised by a [`DocumentStore`](crate::DocumentStore) backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP transport failed (connection, TLS, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Request URL (credentials stripped)
        url: String,
    },

    /// Filesystem access failed
    #[error("io error at {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Payload could not be decoded into a record
    #[error("decode error in {location}: {message}")]
    Decode {
        /// Collection/id or file the payload came from
        location: String,
        /// Decoder message
        message: String,
    },

    /// File extension not recognised as a record format
    #[error("unsupported record format: {0}")]
    UnsupportedFormat(String),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create decode error for a location
    pub fn decode(location: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            location: location.into(),
            message: message.to_string(),
        }
    }

    /// Check if a later identical read could succeed
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Errors reading a section's content record
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Store failed while reading the section record
    #[error("store error reading {section}: {source}")]
    Store {
        /// Section being read
        section: SectionId,
        /// Underlying store failure
        #[source]
        source: StoreError,
    },

    /// Record exists but does not have the section's shape
    #[error("malformed {section} record: {message}")]
    Decode {
        /// Section being decoded
        section: SectionId,
        /// Decoder message
        message: String,
    },
}

impl ContentError {
    /// Wrap a store failure for a section
    pub fn store(section: SectionId, source: StoreError) -> Self {
        Self::Store { section, source }
    }

    /// Create decode error for a section
    pub fn decode(section: SectionId, message: impl ToString) -> Self {
        Self::Decode {
            section,
            message: message.to_string(),
        }
    }

    /// Section the error belongs to
    #[inline]
    #[must_use]
    pub fn section(&self) -> SectionId {
        match self {
            Self::Store { section, .. } | Self::Decode { section, .. } => *section,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = StoreError::Status {
            status: 503,
            url: "https://example.test/content/about".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 503 from https://example.test/content/about"
        );
    }

    #[test]
    fn transient_classification() {
        assert!(StoreError::Status {
            status: 502,
            url: String::new()
        }
        .is_transient());
        assert!(StoreError::Status {
            status: 429,
            url: String::new()
        }
        .is_transient());
        assert!(!StoreError::Status {
            status: 403,
            url: String::new()
        }
        .is_transient());
        assert!(!StoreError::decode("content/about", "bad").is_transient());
    }

    #[test]
    fn content_error_carries_section() {
        let err = ContentError::decode(SectionId::Skills, "expected object");
        assert_eq!(err.section(), SectionId::Skills);
        assert!(err.to_string().contains("malformed skills record"));

        let err = ContentError::store(SectionId::About, StoreError::UnsupportedFormat("txt".into()));
        assert_eq!(err.section(), SectionId::About);
        assert!(err.to_string().starts_with("store error reading about"));
    }
}
