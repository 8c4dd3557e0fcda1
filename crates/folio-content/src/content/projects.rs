use crate::record::lenient;
use serde::{Deserialize, Serialize};

/// One project card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Stable id used for selection; may be blank
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    /// Project title
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    /// Card blurb
    #[serde(deserialize_with = "lenient::string")]
    pub short_description: String,
    /// Overlay description
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    /// Card image reference
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
    /// Live deployment URL
    #[serde(deserialize_with = "lenient::string")]
    pub live_url: String,
    /// Skill tags, absent when the record has none
    #[serde(deserialize_with = "lenient::optional_strings")]
    pub skills: Option<Vec<String>>,
}

impl Project {
    /// Check if the card has anything to show
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.title.trim().is_empty()
            || !self.short_description.trim().is_empty()
            || !self.image_url.trim().is_empty()
    }

    /// Non-blank skill tags
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Live URL, if one is set
    #[must_use]
    pub fn live_url(&self) -> Option<&str> {
        Some(self.live_url.trim()).filter(|url| !url.is_empty())
    }
}

/// Projects record: `{list: [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsContent {
    /// Projects in display order
    pub list: Vec<Project>,
}

impl ProjectsContent {
    /// Projects with something to show
    pub fn with_content(&self) -> impl Iterator<Item = &Project> {
        self.list.iter().filter(|p| p.has_content())
    }
}

impl From<Vec<Project>> for ProjectsContent {
    fn from(list: Vec<Project>) -> Self {
        Self { list }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_camel_case_fields() {
        let projects: ProjectsContent = serde_json::from_value(json!({
            "list": [{
                "id": "p1",
                "title": "Folio",
                "shortDescription": "A site",
                "imageUrl": "/img/folio.png",
                "liveUrl": "https://folio.dev",
                "skills": ["Rust", " "]
            }]
        }))
        .unwrap();
        let project = &projects.list[0];
        assert_eq!(project.short_description, "A site");
        assert_eq!(project.live_url(), Some("https://folio.dev"));
        assert_eq!(project.skills().collect::<Vec<_>>(), vec!["Rust"]);
    }

    #[test]
    fn missing_skills_are_none() {
        let project: Project = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert!(project.skills.is_none());
        assert_eq!(project.live_url(), None);
    }

    #[test]
    fn blank_cards_have_no_content() {
        let projects = ProjectsContent::from(vec![
            Project::default(),
            Project {
                image_url: "/a.png".into(),
                ..Project::default()
            },
        ]);
        assert_eq!(projects.with_content().count(), 1);
    }

    #[test]
    fn list_must_be_a_list() {
        assert!(serde_json::from_value::<ProjectsContent>(json!({"list": "nope"})).is_err());
    }
}
