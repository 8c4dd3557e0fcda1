//! Point-in-time view of a mounted page
//!
//! A snapshot resolves every section's state from whatever has been
//! published so far and assigns ordinals across the visible ones. Taking a
//! snapshot never waits.

use crate::slot::SectionOutcome;
use folio_content::{SectionContent, SectionId, SectionMeta, SocialLinks};
use folio_sections::{assign_ordinals, resolve, NumberingPolicy, NumberingSlot, Visibility};
use serde::Serialize;
use std::sync::Arc;

/// One section's resolved state
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    /// Section
    pub section: SectionId,
    /// Display state
    pub visibility: Visibility,
    /// Fetch outcome, `None` while loading
    pub outcome: Option<Arc<SectionOutcome>>,
    /// Heading ordinal, for visible numbered sections
    pub ordinal: Option<u32>,
}

impl SectionView {
    /// Resolve a section from its (possibly pending) outcome
    #[must_use]
    pub fn resolve(section: SectionId, outcome: Option<Arc<SectionOutcome>>) -> Self {
        let visibility = match &outcome {
            Some(o) => resolve(section, &o.meta, o.content.as_ref()),
            None => Visibility::Loading,
        };
        Self {
            section,
            visibility,
            outcome,
            ordinal: None,
        }
    }

    /// Resolved metadata, `None` while loading
    #[must_use]
    pub fn meta(&self) -> Option<&SectionMeta> {
        self.outcome.as_deref().map(|o| &o.meta)
    }

    /// Decoded content, `None` while loading or absent
    #[must_use]
    pub fn content(&self) -> Option<&SectionContent> {
        self.outcome.as_deref().and_then(|o| o.content.as_ref())
    }

    fn row(&self) -> SectionRow {
        SectionRow {
            section: self.section,
            state: self.visibility,
            ordinal: self.ordinal,
            display_number: self.meta().map(|m| m.display_number),
            enabled: self.meta().map(|m| m.enabled),
        }
    }
}

/// One row of the resolved visibility table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRow {
    /// Section
    pub section: SectionId,
    /// Display state
    pub state: Visibility,
    /// Assigned ordinal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u32>,
    /// Stored display number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_number: Option<u32>,
    /// Stored enabled flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Resolved state of the whole page
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    /// Hero banner (never numbered)
    pub hero: SectionView,
    /// Bulk metadata still pending; sections below the hero are not shown
    pub gate_pending: bool,
    /// Sections below the hero, in page order (empty while gated)
    pub sections: Vec<SectionView>,
    /// Sidebar links, `None` while loading
    pub social: Option<Arc<SocialLinks>>,
}

impl PageSnapshot {
    /// Build a snapshot and number its visible sections
    #[must_use]
    pub fn build(
        hero: SectionView,
        gate_pending: bool,
        mut sections: Vec<SectionView>,
        social: Option<Arc<SocialLinks>>,
        policy: NumberingPolicy,
    ) -> Self {
        if gate_pending {
            sections.clear();
        }
        sections.sort_by_key(|v| v.section);

        let ordinals = assign_ordinals(
            policy,
            sections.iter().map(|v| {
                NumberingSlot::new(
                    v.section,
                    v.visibility,
                    v.meta().map_or_else(|| v.section.default_ordinal(), |m| m.display_number),
                )
            }),
        );
        for view in &mut sections {
            view.ordinal = ordinals.get(&view.section).copied();
        }

        Self {
            hero,
            gate_pending,
            sections,
            social,
        }
    }

    /// View of one section (hero included)
    #[must_use]
    pub fn get(&self, section: SectionId) -> Option<&SectionView> {
        if section == SectionId::Hero {
            return Some(&self.hero);
        }
        self.sections.iter().find(|v| v.section == section)
    }

    /// Sections that render content, in page order
    pub fn visible(&self) -> impl Iterator<Item = &SectionView> {
        std::iter::once(&self.hero)
            .chain(&self.sections)
            .filter(|v| v.visibility.is_visible())
    }

    /// Check if nothing is still loading
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.gate_pending
            && !self.hero.visibility.is_loading()
            && self.sections.iter().all(|v| !v.visibility.is_loading())
    }

    /// Visibility table for every section
    ///
    /// While the metadata gate is pending, sections below the hero report
    /// `loading`.
    #[must_use]
    pub fn table(&self) -> Vec<SectionRow> {
        let mut rows = vec![self.hero.row()];
        if self.gate_pending {
            rows.extend(SectionId::NUMBERED.iter().map(|&section| SectionRow {
                section,
                state: Visibility::Loading,
                ordinal: None,
                display_number: None,
                enabled: None,
            }));
        } else {
            rows.extend(self.sections.iter().map(SectionView::row));
        }
        rows
    }
}
