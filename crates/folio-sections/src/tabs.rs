//! Tab selection for Experience and Skills

use folio_content::{ExperienceContent, SkillsContent};

/// Selectable tabs and the active one
///
/// The active tab is the requested one when it exists, otherwise the first.
/// An empty tab list has no active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    tabs: Vec<String>,
    active: Option<usize>,
}

impl TabSelection {
    /// Select among `tabs`, honouring `requested` when it names one
    #[must_use]
    pub fn new(tabs: Vec<String>, requested: Option<&str>) -> Self {
        let active = requested
            .and_then(|key| tabs.iter().position(|t| t == key))
            .or_else(|| (!tabs.is_empty()).then_some(0));
        Self { tabs, active }
    }

    /// Tabs for the experience entries that have content
    #[must_use]
    pub fn experience(content: &ExperienceContent, requested: Option<&str>) -> Self {
        Self::new(
            content.with_content().map(|e| e.key.clone()).collect(),
            requested,
        )
    }

    /// Tabs for the skill categories that have a non-blank skill
    #[must_use]
    pub fn skills(content: &SkillsContent, requested: Option<&str>) -> Self {
        Self::new(
            content.selectable().map(|c| c.name.clone()).collect(),
            requested,
        )
    }

    /// Tab keys in display order
    #[inline]
    #[must_use]
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    /// Active tab key
    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.tabs[i].as_str())
    }

    /// Check if `key` is the active tab
    #[inline]
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.active() == Some(key)
    }

    /// Check if there is nothing to select
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{ExperienceEntry, SkillCategory};

    fn tabs(keys: &[&str]) -> Vec<String> {
        keys.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_to_first() {
        let selection = TabSelection::new(tabs(&["job1", "job2"]), None);
        assert_eq!(selection.active(), Some("job1"));
    }

    #[test]
    fn honours_known_request() {
        let selection = TabSelection::new(tabs(&["job1", "job2"]), Some("job2"));
        assert!(selection.is_active("job2"));
    }

    #[test]
    fn unknown_request_falls_back() {
        let selection = TabSelection::new(tabs(&["job1", "job2"]), Some("job9"));
        assert_eq!(selection.active(), Some("job1"));
    }

    #[test]
    fn empty_has_no_active() {
        let selection = TabSelection::new(Vec::new(), Some("x"));
        assert!(selection.is_empty());
        assert_eq!(selection.active(), None);
    }

    #[test]
    fn skills_skip_empty_categories() {
        let skills = SkillsContent::from(vec![
            SkillCategory::new("Backend", Vec::<String>::new()),
            SkillCategory::new("Frontend", ["React", "CSS"]),
        ]);
        let selection = TabSelection::skills(&skills, Some("Backend"));
        assert_eq!(selection.tabs(), ["Frontend".to_string()]);
        assert_eq!(selection.active(), Some("Frontend"));
    }

    #[test]
    fn experience_skips_blank_entries() {
        let experience = ExperienceContent::from(vec![
            ExperienceEntry {
                key: "job1".into(),
                ..ExperienceEntry::default()
            },
            ExperienceEntry {
                key: "job2".into(),
                title: "Engineer".into(),
                ..ExperienceEntry::default()
            },
        ]);
        let selection = TabSelection::experience(&experience, None);
        assert_eq!(selection.active(), Some("job2"));
    }
}
