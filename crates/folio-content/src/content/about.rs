use crate::record::lenient;
use serde::{Deserialize, Serialize};

/// About section content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    /// Section heading
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    /// Body paragraphs in display order
    #[serde(deserialize_with = "lenient::strings")]
    pub paragraphs: Vec<String>,
    /// Profile image reference (opaque URL)
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
}

impl AboutContent {
    /// Paragraphs with blank entries dropped
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.paragraphs
            .iter()
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }

    /// Image reference, if one is set
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        Some(self.image_url.trim()).filter(|url| !url.is_empty())
    }
}
