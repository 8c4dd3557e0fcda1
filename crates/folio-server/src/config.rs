//! Site configuration
//!
//! Loaded from a TOML file, then overridden from `FOLIO_*` environment
//! variables, then validated:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8080"
//! render_wait_ms = 1500
//!
//! [store]
//! backend = "files"          # files | bundle | firestore
//! dir = "content"
//! cache_ttl_secs = 60
//!
//! [presentation]
//! numbering = "positional"   # positional | fixed-ordinal
//! ordinal_format = "zero-padded"
//! metadata = "bulk"          # bulk | per-section
//!
//! [email]
//! backend = "log"            # log | emailjs
//!
//! [owner]
//! name = "Ada Lovelace"
//! email = "ada@engines.dev"
//! ```

use crate::error::ConfigError;
use folio_content::FirestoreConfig;
use folio_page::{EmailJsConfig, MetadataStrategy, Owner, PageSettings};
use folio_sections::{NumberingPolicy, OrdinalFormat, ThemeConfig};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// Longest wait for section fetches before rendering placeholders
    pub render_wait_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            render_wait_ms: 1500,
        }
    }
}

/// Where content is read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Directory tree of JSON/YAML records
    #[default]
    Files,
    /// Single bundle file loaded into memory
    Bundle,
    /// Firestore REST API
    Firestore,
}

/// Content store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend
    pub backend: StoreBackend,
    /// Record directory (`files`)
    pub dir: PathBuf,
    /// Bundle file (`bundle`)
    pub bundle: Option<PathBuf>,
    /// Firestore connection (`firestore`)
    pub firestore: FirestoreConfig,
    /// Read cache lifetime; `0` disables caching
    pub cache_ttl_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            dir: PathBuf::from("content"),
            bundle: None,
            firestore: FirestoreConfig::default(),
            cache_ttl_secs: 0,
        }
    }
}

/// Presentation choices, fixed for the process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Heading numbering policy
    pub numbering: NumberingPolicy,
    /// Ordinal format
    pub ordinal_format: OrdinalFormat,
    /// Metadata fetch strategy
    pub metadata: MetadataStrategy,
    /// Theme
    pub theme: ThemeConfig,
}

/// Contact delivery backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackend {
    /// Log messages without sending
    #[default]
    Log,
    /// EmailJS REST API
    EmailJs,
}

/// Contact delivery settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Backend
    pub backend: EmailBackend,
    /// EmailJS account (`emailjs`)
    pub emailjs: EmailJsConfig,
}

/// Complete site configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Content store
    pub store: StoreConfig,
    /// Presentation
    pub presentation: PresentationConfig,
    /// Contact delivery
    pub email: EmailConfig,
    /// Footer details
    pub owner: Owner,
}

impl SiteConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With listen address
    #[inline]
    #[must_use]
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.server.bind = bind;
        self
    }

    /// With a record directory (switches to the `files` backend)
    #[inline]
    #[must_use]
    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store.backend = StoreBackend::Files;
        self.store.dir = dir.into();
        self
    }

    /// With a bundle file (switches to the `bundle` backend)
    #[inline]
    #[must_use]
    pub fn with_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.store.backend = StoreBackend::Bundle;
        self.store.bundle = Some(path.into());
        self
    }

    /// With numbering policy
    #[inline]
    #[must_use]
    pub fn with_numbering(mut self, numbering: NumberingPolicy) -> Self {
        self.presentation.numbering = numbering;
        self
    }

    /// With owner details
    #[inline]
    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = owner;
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed TOML or unknown enum strings
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an optional file, apply environment overrides and validate
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed, or a
    /// setting is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml(path, &text)?
            }
            None => Self::default(),
        };

        let config = config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `FOLIO_*` overrides read through `lookup`
    ///
    /// # Errors
    /// - `ConfigError::Invalid` if an override cannot be parsed
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(bind) = var("FOLIO_BIND") {
            self.server.bind = bind
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("FOLIO_BIND", e))?;
        }
        if let Some(ms) = var("FOLIO_RENDER_WAIT_MS") {
            self.server.render_wait_ms = ms
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid("FOLIO_RENDER_WAIT_MS", e))?;
        }
        if let Some(dir) = var("FOLIO_STORE_DIR") {
            self = self.with_store_dir(dir);
        }
        if let Some(project) = var("FOLIO_FIRESTORE_PROJECT") {
            self.store.backend = StoreBackend::Firestore;
            self.store.firestore.project_id = project;
        }
        if let Some(key) = var("FOLIO_FIRESTORE_API_KEY") {
            self.store.firestore.api_key = Some(key);
        }
        if let Some(id) = var("FOLIO_EMAILJS_SERVICE_ID") {
            self.email.backend = EmailBackend::EmailJs;
            self.email.emailjs.service_id = id;
        }
        if let Some(id) = var("FOLIO_EMAILJS_TEMPLATE_ID") {
            self.email.emailjs.template_id = id;
        }
        if let Some(key) = var("FOLIO_EMAILJS_PUBLIC_KEY") {
            self.email.emailjs.public_key = key;
        }
        if let Some(numbering) = var("FOLIO_NUMBERING") {
            self.presentation.numbering = numbering
                .parse()
                .map_err(|e| ConfigError::invalid("FOLIO_NUMBERING", e))?;
        }
        Ok(self)
    }

    /// Check that the selected backends have what they need
    ///
    /// # Errors
    /// - `ConfigError::Invalid` naming the first missing setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.store.backend {
            StoreBackend::Files if self.store.dir.as_os_str().is_empty() => {
                return Err(ConfigError::invalid("store.dir", "must not be empty"));
            }
            StoreBackend::Bundle if self.store.bundle.is_none() => {
                return Err(ConfigError::invalid("store.bundle", "required for the bundle backend"));
            }
            StoreBackend::Firestore if self.store.firestore.project_id.trim().is_empty() => {
                return Err(ConfigError::invalid(
                    "store.firestore.project_id",
                    "required for the firestore backend",
                ));
            }
            _ => {}
        }

        if self.email.backend == EmailBackend::EmailJs {
            let missing = self.email.emailjs.missing();
            if !missing.is_empty() {
                return Err(ConfigError::invalid(
                    "email.emailjs",
                    format!("missing {}", missing.join(", ")),
                ));
            }
        }
        Ok(())
    }

    /// Render budget as a duration
    #[must_use]
    pub fn render_budget(&self) -> Duration {
        Duration::from_millis(self.server.render_wait_ms)
    }

    /// Presentation settings for the page composer
    #[must_use]
    pub fn page_settings(&self) -> PageSettings {
        PageSettings::default()
            .with_policy(self.presentation.numbering)
            .with_format(self.presentation.ordinal_format)
            .with_strategy(self.presentation.metadata)
            .with_theme(self.presentation.theme)
            .with_owner(self.owner.clone())
            .with_render_budget(self.render_budget())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.presentation.numbering, NumberingPolicy::Positional);
        assert_eq!(config.presentation.ordinal_format, OrdinalFormat::ZeroPadded);
        assert_eq!(config.presentation.metadata, MetadataStrategy::Bulk);
        assert!(!config.presentation.theme.toggle_enabled);
        assert_eq!(config.render_budget(), Duration::from_millis(1500));
    }

    #[test]
    fn parses_toml_sections() {
        let text = r#"
            [server]
            bind = "0.0.0.0:3000"

            [store]
            backend = "bundle"
            bundle = "site.yaml"
            cache_ttl_secs = 30

            [presentation]
            numbering = "fixed-ordinal"
            ordinal_format = "decimal"
            metadata = "per-section"

            [owner]
            name = "Ada Lovelace"
            email = "ada@engines.dev"
        "#;
        let config = SiteConfig::from_toml(Path::new("folio.toml"), text).unwrap();

        assert_eq!(config.server.bind.port(), 3000);
        assert_eq!(config.store.backend, StoreBackend::Bundle);
        assert_eq!(config.store.bundle.as_deref(), Some(Path::new("site.yaml")));
        assert_eq!(config.presentation.numbering, NumberingPolicy::FixedOrdinal);
        assert_eq!(config.presentation.ordinal_format, OrdinalFormat::Decimal);
        assert_eq!(config.presentation.metadata, MetadataStrategy::PerSection);
        assert_eq!(config.owner.name, "Ada Lovelace");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_enum_string_is_rejected() {
        let text = "[presentation]\nnumbering = \"roman\"\n";
        let err = SiteConfig::from_toml(Path::new("folio.toml"), text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_overrides_file_values() {
        let config = SiteConfig::default()
            .apply_env(env(&[
                ("FOLIO_BIND", "0.0.0.0:9000"),
                ("FOLIO_NUMBERING", "fixed"),
                ("FOLIO_RENDER_WAIT_MS", "250"),
                ("FOLIO_FIRESTORE_PROJECT", "portfolio-1"),
                ("FOLIO_FIRESTORE_API_KEY", "k"),
            ]))
            .unwrap();

        assert_eq!(config.server.bind.port(), 9000);
        assert_eq!(config.presentation.numbering, NumberingPolicy::FixedOrdinal);
        assert_eq!(config.render_budget(), Duration::from_millis(250));
        assert_eq!(config.store.backend, StoreBackend::Firestore);
        assert_eq!(config.store.firestore.api_key.as_deref(), Some("k"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_env_value_names_variable() {
        let err = SiteConfig::default()
            .apply_env(env(&[("FOLIO_NUMBERING", "roman")]))
            .unwrap_err();
        assert!(err.is_invalid_value());
        assert!(err.to_string().contains("FOLIO_NUMBERING"));
    }

    #[test]
    fn emailjs_requires_every_id() {
        let config = SiteConfig::default()
            .apply_env(env(&[("FOLIO_EMAILJS_SERVICE_ID", "svc")]))
            .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("template_id, public_key"));
    }

    #[test]
    fn bundle_backend_requires_path() {
        let mut config = SiteConfig::default();
        config.store.backend = StoreBackend::Bundle;
        assert!(config.validate().unwrap_err().to_string().contains("store.bundle"));
    }
}
