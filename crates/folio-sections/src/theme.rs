//! Site theme
//!
//! Built once from configuration and passed to the page shell.

use serde::{Deserialize, Serialize};

/// Colour scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light scheme
    #[default]
    Light,
    /// Dark scheme
    Dark,
}

impl ThemeMode {
    /// Class applied to the document root
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Process-wide theme settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Scheme every page is rendered with
    pub mode: ThemeMode,
    /// Whether the theme toggle is offered
    pub toggle_enabled: bool,
}

impl ThemeConfig {
    /// Forced light theme with the toggle disabled
    #[inline]
    #[must_use]
    pub fn forced_light() -> Self {
        Self::default()
    }

    /// With scheme
    #[inline]
    #[must_use]
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    /// With toggle enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_toggle(mut self, enabled: bool) -> Self {
        self.toggle_enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_forced_light() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert!(!theme.toggle_enabled);
        assert_eq!(theme, ThemeConfig::forced_light());
    }

    #[test]
    fn builders() {
        let theme = ThemeConfig::default().with_mode(ThemeMode::Dark).with_toggle(true);
        assert_eq!(theme.mode.css_class(), "dark");
        assert!(theme.toggle_enabled);
    }
}
