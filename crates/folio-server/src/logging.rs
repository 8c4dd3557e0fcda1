//! Tracing subscriber setup
//!
//! Filter comes from `RUST_LOG` (default `info`). `FOLIO_LOG_JSON=true`
//! switches to JSON lines. Output goes to stderr so `folio render` can
//! write HTML to stdout.

use crate::error::ServerError;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Read a boolean environment flag
#[must_use]
pub fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Install the global subscriber
///
/// # Errors
/// - `ServerError::Logging` if a subscriber is already installed
pub fn init_logging() -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if env_bool("FOLIO_LOG_JSON", false) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    result.map_err(|e| ServerError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" on "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn unset_flag_uses_default() {
        assert!(env_bool("FOLIO_TEST_FLAG_THAT_IS_NEVER_SET", true));
        assert!(!env_bool("FOLIO_TEST_FLAG_THAT_IS_NEVER_SET", false));
    }
}
