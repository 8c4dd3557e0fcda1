use crate::record::{lenient, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// One job in the experience record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    /// Record key the entry was stored under (e.g. `job2`)
    #[serde(skip)]
    pub key: String,
    /// Role title
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    /// Company or context, shown as `@ context`
    #[serde(deserialize_with = "lenient::string")]
    pub context: String,
    /// Free-form date range
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    /// Bullet points
    #[serde(deserialize_with = "lenient::strings")]
    pub points: Vec<String>,
}

impl ExperienceEntry {
    /// Check if any field carries text
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.title.trim().is_empty()
            || !self.context.trim().is_empty()
            || !self.date.trim().is_empty()
            || self.points().next().is_some()
    }

    /// Non-blank bullet points
    pub fn points(&self) -> impl Iterator<Item = &str> {
        self.points
            .iter()
            .map(String::as_str)
            .filter(|p| !p.trim().is_empty())
    }

    /// Tab label: trimmed title or `Untitled`
    #[must_use]
    pub fn label(&self) -> &str {
        match self.title.trim() {
            "" => "Untitled",
            title => title,
        }
    }
}

/// Experience entries in display order
///
/// The record is a map of entry key to entry; entries are ordered by the
/// numeric part of their key so `job2` sorts before `job10`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceContent {
    /// Entries in display order
    pub entries: Vec<ExperienceEntry>,
}

impl ExperienceContent {
    /// Build from a raw record, skipping values that are not objects
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let mut entries: Vec<ExperienceEntry> = record
            .iter()
            .filter(|(_, value)| value.is_object())
            .filter_map(|(key, value)| {
                match serde_json::from_value::<ExperienceEntry>(value.clone()) {
                    Ok(mut entry) => {
                        entry.key = key.clone();
                        Some(entry)
                    }
                    Err(e) => {
                        tracing::debug!(key = %key, error = %e, "skipping malformed experience entry");
                        None
                    }
                }
            })
            .collect();

        entries.sort_by(|a, b| compare_keys(&a.key, &b.key));
        Self { entries }
    }

    /// Entries with at least one non-blank field
    pub fn with_content(&self) -> impl Iterator<Item = &ExperienceEntry> {
        self.entries.iter().filter(|e| e.has_content())
    }

    /// Find an entry by key
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<&ExperienceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

impl From<Vec<ExperienceEntry>> for ExperienceContent {
    fn from(entries: Vec<ExperienceEntry>) -> Self {
        Self { entries }
    }
}

/// Digits of a key read as a number
fn key_number(key: &str) -> Option<u64> {
    let digits: String = key.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Numbered keys first by number, then everything else lexically
fn compare_keys(a: &str, b: &str) -> Ordering {
    match (key_number(a), key_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

impl Serialize for ExperienceContent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExperienceContent {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value
            .as_object()
            .map(Self::from_record)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: Value) -> ExperienceContent {
        ExperienceContent::from_record(value.as_object().unwrap())
    }

    #[test]
    fn sorts_by_numeric_key() {
        let experience = content(json!({
            "job10": {"title": "Ten"},
            "job2": {"title": "Two"},
            "job1": {"title": "One"},
            "intern": {"title": "Intern"}
        }));
        let keys: Vec<&str> = experience.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["job1", "job2", "job10", "intern"]);
    }

    #[test]
    fn skips_non_object_values() {
        let experience = content(json!({
            "job1": {"title": "One"},
            "note": "not an entry"
        }));
        assert_eq!(experience.entries.len(), 1);
    }

    #[test]
    fn blank_entries_have_no_content() {
        let experience = content(json!({
            "job1": {"title": "  ", "points": ["", " "]},
            "job2": {"date": "2021"}
        }));
        let keys: Vec<&str> = experience.with_content().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["job2"]);
    }

    #[test]
    fn label_falls_back_to_untitled() {
        let entry = ExperienceEntry {
            title: "  Engineer ".to_string(),
            ..ExperienceEntry::default()
        };
        assert_eq!(entry.label(), "Engineer");
        assert_eq!(ExperienceEntry::default().label(), "Untitled");
    }

    #[test]
    fn points_drop_blanks() {
        let entry = ExperienceEntry {
            points: vec!["Shipped".into(), "   ".into(), "Led".into()],
            ..ExperienceEntry::default()
        };
        assert_eq!(entry.points().collect::<Vec<_>>(), vec!["Shipped", "Led"]);
    }
}
