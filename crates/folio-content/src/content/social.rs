use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::record::scalar_to_string;

/// Most links the sidebar shows
pub const MAX_SOCIAL_LINKS: usize = 5;

/// One sidebar link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display name, may be blank
    #[serde(default)]
    pub name: String,
    /// Target URL
    #[serde(default)]
    pub url: String,
}

impl SocialLink {
    /// Link with only a URL
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            url: url.into(),
        }
    }

    /// Hover label: the name, or the URL when the name is blank
    #[must_use]
    pub fn label(&self) -> &str {
        match self.name.trim() {
            "" => &self.url,
            name => name,
        }
    }
}

/// Social record: `{links: [string | {name, url}]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// Links in record order, capped at [`MAX_SOCIAL_LINKS`]
    #[serde(default, deserialize_with = "links")]
    pub links: Vec<SocialLink>,
}

impl From<Vec<SocialLink>> for SocialLinks {
    fn from(mut links: Vec<SocialLink>) -> Self {
        links.truncate(MAX_SOCIAL_LINKS);
        Self { links }
    }
}

fn links<'de, D>(deserializer: D) -> Result<Vec<SocialLink>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(fields) => Some(SocialLink {
                name: fields.get("name").and_then(scalar_to_string).unwrap_or_default(),
                url: fields.get("url").and_then(scalar_to_string).unwrap_or_default(),
            }),
            other => scalar_to_string(&other).map(SocialLink::url),
        })
        .take(MAX_SOCIAL_LINKS)
        .collect())
}
