use crate::record::lenient;
use serde::{Deserialize, Serialize};

/// Hero banner text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    /// Greeting line above the name
    #[serde(deserialize_with = "lenient::string")]
    pub intro: String,
    /// Owner's name
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    /// Tagline under the name
    #[serde(deserialize_with = "lenient::string")]
    pub subtitle: String,
    /// Short pitch paragraph
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

impl HeroContent {
    /// Check if every field is blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.intro, &self.name, &self.subtitle, &self.description]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}
