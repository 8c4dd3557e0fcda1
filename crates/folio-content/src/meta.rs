//! Per-section display metadata
//!
//! Stored in the `sections` collection under the section key:
//!
//! ```json
//! {"displayNumber": "02", "enabled": true, "description": "..."}
//! ```
//!
//! Every field is optional. Missing or unusable values fall back to the
//! section's defaults, so a section with no metadata record at all is
//! enabled and numbered by its default ordinal.

use crate::record::{scalar_to_string, Record};
use crate::section::SectionId;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Resolved metadata for one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMeta {
    /// Manual ordinal (always positive for numbered sections)
    pub display_number: u32,
    /// Whether the section may render at all
    pub enabled: bool,
    /// Optional lead text (contact uses it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SectionMeta {
    /// Defaults for a section with no metadata record
    #[inline]
    #[must_use]
    pub fn defaults(section: SectionId) -> Self {
        Self {
            display_number: section.default_ordinal(),
            enabled: true,
            description: None,
        }
    }

    /// Resolve metadata from an optional record, filling defaults
    #[must_use]
    pub fn from_record(section: SectionId, record: Option<&Record>) -> Self {
        let Some(record) = record else {
            return Self::defaults(section);
        };

        Self {
            display_number: record
                .get("displayNumber")
                .and_then(parse_display_number)
                .unwrap_or_else(|| section.default_ordinal()),
            enabled: record
                .get("enabled")
                .and_then(Value::as_bool)
                .unwrap_or(true),
            description: record
                .get("description")
                .and_then(scalar_to_string)
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }

    /// With enabled flag
    #[inline]
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// With display number
    #[inline]
    #[must_use]
    pub fn with_display_number(mut self, display_number: u32) -> Self {
        self.display_number = display_number;
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Parse a `displayNumber` value: positive integer or numeral string
///
/// `2`, `"2"` and `"02"` all parse to 2. Zero, negatives, fractions and
/// non-numeric text are rejected.
#[must_use]
pub fn parse_display_number(value: &Value) -> Option<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.filter(|n| *n > 0)
}

/// Metadata for every section, as produced by a bulk read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaTable {
    entries: BTreeMap<SectionId, SectionMeta>,
}

impl MetaTable {
    /// Empty table (every lookup yields defaults)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a listing of the `sections` collection
    ///
    /// Ids that do not name a section are ignored.
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = (&'a str, &'a Record)>) -> Self {
        let mut table = Self::new();
        for (id, record) in records {
            match id.parse::<SectionId>() {
                Ok(section) => table.insert(section, SectionMeta::from_record(section, Some(record))),
                Err(_) => tracing::debug!(id, "ignoring metadata for unknown section"),
            }
        }
        table
    }

    /// Set a section's metadata
    pub fn insert(&mut self, section: SectionId, meta: SectionMeta) {
        self.entries.insert(section, meta);
    }

    /// With a section's metadata
    #[must_use]
    pub fn with(mut self, section: SectionId, meta: SectionMeta) -> Self {
        self.insert(section, meta);
        self
    }

    /// Metadata for a section, defaults when the collection had no record
    #[must_use]
    pub fn get(&self, section: SectionId) -> SectionMeta {
        self.entries
            .get(&section)
            .cloned()
            .unwrap_or_else(|| SectionMeta::defaults(section))
    }

    /// Check if the collection held a record for the section
    #[inline]
    #[must_use]
    pub fn contains(&self, section: SectionId) -> bool {
        self.entries.contains_key(&section)
    }

    /// Number of sections with a stored record
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no section had a stored record
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn absent_record_uses_defaults() {
        let meta = SectionMeta::from_record(SectionId::About, None);
        assert!(meta.enabled);
        assert_eq!(meta.display_number, 1);
        assert_eq!(meta.description, None);
    }

    #[test]
    fn display_number_accepts_numerals() {
        assert_eq!(parse_display_number(&json!(2)), Some(2));
        assert_eq!(parse_display_number(&json!("2")), Some(2));
        assert_eq!(parse_display_number(&json!("02")), Some(2));
        assert_eq!(parse_display_number(&json!(" 7 ")), Some(7));
    }

    #[test]
    fn display_number_rejects_junk() {
        for value in [json!(0), json!(-3), json!(2.5), json!("two"), json!(""), json!(null)] {
            assert_eq!(parse_display_number(&value), None, "{value}");
        }
    }

    #[test]
    fn bad_display_number_falls_back() {
        let meta =
            SectionMeta::from_record(SectionId::Skills, Some(&record(json!({"displayNumber": "x"}))));
        assert_eq!(meta.display_number, 3);
    }

    #[test]
    fn enabled_false_is_respected() {
        let meta = SectionMeta::from_record(
            SectionId::Experience,
            Some(&record(json!({"enabled": false, "displayNumber": 9}))),
        );
        assert!(!meta.enabled);
        assert_eq!(meta.display_number, 9);
    }

    #[test]
    fn blank_description_is_none() {
        let meta = SectionMeta::from_record(
            SectionId::Contact,
            Some(&record(json!({"description": "   "}))),
        );
        assert_eq!(meta.description, None);
    }

    #[test]
    fn table_fills_missing_sections() {
        let experience = record(json!({"enabled": false}));
        let stray = record(json!({"enabled": false}));
        let table = MetaTable::from_records([
            ("experience", &experience),
            ("navbar", &stray),
        ]);

        assert_eq!(table.len(), 1);
        assert!(!table.get(SectionId::Experience).enabled);
        assert!(table.get(SectionId::About).enabled);
        assert_eq!(table.get(SectionId::Contact).display_number, 6);
    }
}
