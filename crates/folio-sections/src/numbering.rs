//! Section heading numerals
//!
//! One [`NumberingPolicy`] and one [`OrdinalFormat`] are chosen per process
//! and applied to every section, so headings can never mix schemes.
//!
//! - **FixedOrdinal**: each section shows its stored `displayNumber`
//!   (or its default ordinal); gaps and duplicates are shown as stored.
//! - **Positional**: visible sections are numbered 1..N in page order.
//!
//! Loading and hidden sections carry no ordinal and are not counted.

use crate::visibility::Visibility;
use folio_content::SectionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How heading ordinals are chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingPolicy {
    /// Ordinal is the section's stored display number
    FixedOrdinal,
    /// Ordinal is the section's position among visible sections
    #[default]
    Positional,
}

impl NumberingPolicy {
    /// Configuration name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FixedOrdinal => "fixed-ordinal",
            Self::Positional => "positional",
        }
    }
}

impl fmt::Display for NumberingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberingPolicy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed-ordinal" | "fixed" => Ok(Self::FixedOrdinal),
            "positional" => Ok(Self::Positional),
            other => Err(UnknownVariant::new("numbering policy", other)),
        }
    }
}

/// How an ordinal is written in a heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrdinalFormat {
    /// `01.`
    #[default]
    ZeroPadded,
    /// `0.1`
    Decimal,
}

impl OrdinalFormat {
    /// Write an ordinal
    #[must_use]
    pub fn format(self, ordinal: u32) -> String {
        match self {
            Self::ZeroPadded => format!("{ordinal:02}."),
            Self::Decimal => format!("0.{ordinal}"),
        }
    }

    /// Configuration name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZeroPadded => "zero-padded",
            Self::Decimal => "decimal",
        }
    }
}

impl FromStr for OrdinalFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero-padded" | "padded" => Ok(Self::ZeroPadded),
            "decimal" => Ok(Self::Decimal),
            other => Err(UnknownVariant::new("ordinal format", other)),
        }
    }
}

/// A configuration string did not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// What was being parsed
    pub kind: &'static str,
    /// Rejected input
    pub value: String,
}

impl UnknownVariant {
    /// Create error for a kind and rejected value
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// One section's input to ordinal assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingSlot {
    /// Section
    pub section: SectionId,
    /// Resolved display state
    pub visibility: Visibility,
    /// Stored (or default) display number
    pub display_number: u32,
}

impl NumberingSlot {
    /// Create slot
    #[inline]
    #[must_use]
    pub fn new(section: SectionId, visibility: Visibility, display_number: u32) -> Self {
        Self {
            section,
            visibility,
            display_number,
        }
    }
}

/// Assign ordinals to the visible, numbered sections
///
/// Slots are taken in page order regardless of input order. The hero is
/// never numbered.
#[must_use]
pub fn assign_ordinals(
    policy: NumberingPolicy,
    slots: impl IntoIterator<Item = NumberingSlot>,
) -> BTreeMap<SectionId, u32> {
    let mut slots: Vec<NumberingSlot> = slots
        .into_iter()
        .filter(|s| s.section != SectionId::Hero && s.visibility.is_visible())
        .collect();
    slots.sort_by_key(|s| s.section);

    match policy {
        NumberingPolicy::FixedOrdinal => slots
            .into_iter()
            .map(|s| (s.section, s.display_number))
            .collect(),
        NumberingPolicy::Positional => slots
            .into_iter()
            .zip(1..)
            .map(|(s, position)| (s.section, position))
            .collect(),
    }
}
