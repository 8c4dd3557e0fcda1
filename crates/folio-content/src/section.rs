//! Section identifiers and the fixed page sequence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named region of the page
///
/// Declaration order is the fixed page sequence; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Banner at the top of the page (never numbered, no metadata)
    Hero,
    /// About me
    About,
    /// Work experience
    Experience,
    /// Skills by category
    Skills,
    /// Projects gallery
    Projects,
    /// Testimonials
    Testimonials,
    /// Contact form
    Contact,
}

impl SectionId {
    /// Every section in page order
    pub const SEQUENCE: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Sections below the hero, in page order
    pub const NUMBERED: [SectionId; 6] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Record id used in both the content and metadata collections
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    /// Ordinal used when metadata carries no usable `displayNumber`
    ///
    /// The hero is never numbered and reports 0.
    #[inline]
    #[must_use]
    pub fn default_ordinal(self) -> u32 {
        match self {
            SectionId::Hero => 0,
            SectionId::About => 1,
            SectionId::Experience => 2,
            SectionId::Skills => 3,
            SectionId::Projects => 4,
            SectionId::Testimonials => 5,
            SectionId::Contact => 6,
        }
    }

    /// Whether visibility depends on the content record being non-blank
    #[inline]
    #[must_use]
    pub fn is_content_gated(self) -> bool {
        !matches!(self, SectionId::Hero | SectionId::Contact)
    }

    /// Whether the section reads a content record at all
    #[inline]
    #[must_use]
    pub fn has_content_record(self) -> bool {
        self != SectionId::Contact
    }

    /// Whether the section has display metadata (enabled flag, ordinal)
    #[inline]
    #[must_use]
    pub fn has_metadata(self) -> bool {
        self != SectionId::Hero
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Unknown section key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: '{0}'")]
pub struct ParseSectionError(pub String);

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::SEQUENCE
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_sorted_by_declaration() {
        let mut sorted = SectionId::SEQUENCE;
        sorted.sort();
        assert_eq!(sorted, SectionId::SEQUENCE);
        assert_eq!(&SectionId::SEQUENCE[1..], &SectionId::NUMBERED[..]);
    }

    #[test]
    fn key_roundtrip() {
        for section in SectionId::SEQUENCE {
            assert_eq!(section.key().parse::<SectionId>(), Ok(section));
        }
        assert_eq!("  Projects ".parse::<SectionId>(), Ok(SectionId::Projects));
        assert!("social".parse::<SectionId>().is_err());
    }

    #[test]
    fn default_ordinals_follow_sequence() {
        let ordinals: Vec<u32> = SectionId::NUMBERED
            .iter()
            .map(|s| s.default_ordinal())
            .collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn gating_flags() {
        assert!(!SectionId::Hero.is_content_gated());
        assert!(!SectionId::Contact.is_content_gated());
        assert!(SectionId::Skills.is_content_gated());
        assert!(!SectionId::Hero.has_metadata());
        assert!(!SectionId::Contact.has_content_record());
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&SectionId::Testimonials).unwrap();
        assert_eq!(json, "\"testimonials\"");
    }
}
