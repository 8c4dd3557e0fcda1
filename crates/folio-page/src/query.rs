//! Per-request UI state carried in the query string
//!
//! Every interactive control on the page is a plain link. Following one
//! changes a single parameter and keeps the rest, so the active tab
//! survives opening the contact form and so on.

use folio_sections::{RevealMode, UiLinks};
use serde::Deserialize;
use url::form_urlencoded;

/// UI state of one page view
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    /// Active experience tab key
    pub experience: Option<String>,
    /// Active skills category
    pub skills: Option<String>,
    /// Gallery reveal (`all` expands)
    pub projects: Option<String>,
    /// Project whose overlay is open
    pub project: Option<String>,
    /// Contact form reveal (`open`)
    pub contact: Option<String>,
}

impl PageQuery {
    /// Parse a raw query string (without the leading `?`)
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = Some(value.into_owned());
            match key.as_ref() {
                "experience" => parsed.experience = value,
                "skills" => parsed.skills = value,
                "projects" => parsed.projects = value,
                "project" => parsed.project = value,
                "contact" => parsed.contact = value,
                _ => {}
            }
        }
        parsed
    }

    /// Requested gallery mode
    #[must_use]
    pub fn reveal(&self) -> RevealMode {
        self.projects
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Check if the contact form was revealed
    #[must_use]
    pub fn contact_open(&self) -> bool {
        matches!(self.contact.as_deref(), Some("open" | "1" | "true"))
    }

    /// Encoded query string, empty when no state is set
    #[must_use]
    pub fn encode(&self) -> String {
        let pairs = [
            ("experience", &self.experience),
            ("skills", &self.skills),
            ("projects", &self.projects),
            ("project", &self.project),
            ("contact", &self.contact),
        ];
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }

    fn href(&self, fragment: &str, change: impl FnOnce(&mut Self)) -> String {
        let mut next = self.clone();
        change(&mut next);
        match next.encode().as_str() {
            "" => format!("/#{fragment}"),
            query => format!("/?{query}#{fragment}"),
        }
    }
}

impl UiLinks for PageQuery {
    fn experience_tab(&self, key: &str) -> String {
        self.href("experience", |q| q.experience = Some(key.to_string()))
    }

    fn skills_tab(&self, category: &str) -> String {
        self.href("skills", |q| q.skills = Some(category.to_string()))
    }

    fn projects_reveal(&self, mode: RevealMode) -> String {
        self.href("projects", |q| {
            q.projects = match mode {
                RevealMode::Expanded => Some("all".to_string()),
                RevealMode::Collapsed => None,
            };
        })
    }

    fn project(&self, key: Option<&str>) -> String {
        self.href("projects", |q| q.project = key.map(str::to_string))
    }

    fn contact_form(&self, open: bool) -> String {
        self.href("contact", |q| q.contact = open.then(|| "open".to_string()))
    }
}
