use crate::record::{scalar_to_string, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One skills category and its entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category name (record key)
    pub name: String,
    /// Skills as stored, blanks included
    pub skills: Vec<String>,
}

impl SkillCategory {
    /// Create a category
    #[must_use]
    pub fn new(name: impl Into<String>, skills: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Non-blank skills
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Check if the category can be selected as a tab
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.skills().next().is_some()
    }
}

/// Skill categories in record order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillsContent {
    /// Categories in record order
    pub categories: Vec<SkillCategory>,
}

impl SkillsContent {
    /// Build from a raw record: category → list of skills
    ///
    /// A scalar value is read as a single skill; other shapes as empty.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let categories = record
            .iter()
            .map(|(name, value)| {
                let skills = match value {
                    Value::Array(items) => items.iter().filter_map(scalar_to_string).collect(),
                    other => scalar_to_string(other).into_iter().collect(),
                };
                SkillCategory {
                    name: name.clone(),
                    skills,
                }
            })
            .collect();
        Self { categories }
    }

    /// Categories with at least one non-blank skill
    pub fn selectable(&self) -> impl Iterator<Item = &SkillCategory> {
        self.categories.iter().filter(|c| c.is_selectable())
    }

    /// Find a category by name
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&SkillCategory> {
        self.categories.iter().find(|c| c.name == name)
    }
}

impl From<Vec<SkillCategory>> for SkillsContent {
    fn from(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_record_order() {
        let record: Record = serde_json::from_value(json!({
            "Frontend": ["React", "TypeScript"],
            "Backend": ["Rust"],
            "Cloud": ["GCP"]
        }))
        .unwrap();
        let skills = SkillsContent::from_record(&record);
        let names: Vec<&str> = skills.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Frontend", "Backend", "Cloud"]);
    }

    #[test]
    fn empty_categories_are_not_selectable() {
        let record: Record = serde_json::from_value(json!({
            "Frontend": ["React", ""],
            "Backend": [],
            "Ops": ["  "]
        }))
        .unwrap();
        let skills = SkillsContent::from_record(&record);
        let selectable: Vec<&str> = skills.selectable().map(|c| c.name.as_str()).collect();
        assert_eq!(selectable, vec!["Frontend"]);
        assert_eq!(
            skills.category("Frontend").unwrap().skills().collect::<Vec<_>>(),
            vec!["React"]
        );
    }

    #[test]
    fn odd_shapes_are_tolerated() {
        let record: Record =
            serde_json::from_value(json!({"Solo": "Go", "Weird": {"a": 1}})).unwrap();
        let skills = SkillsContent::from_record(&record);
        assert_eq!(skills.categories[0].skills, vec!["Go"]);
        assert!(skills.categories[1].skills.is_empty());
    }
}
