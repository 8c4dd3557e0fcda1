//! Mounting a page: one fetch task per section
//!
//! Mounting spawns every fetch immediately and returns. The page reads
//! whatever has been published through [`MountedPage::snapshot`] and may wait
//! a bounded time with [`MountedPage::settle`]. Dropping the page drops its
//! slots; fetches still in flight finish and their results are discarded.
//!
//! # Metadata strategies
//!
//! - **Bulk**: one `meta_table` read gates every section below the hero.
//!   Gated section tasks spawn only after it completes, and each reads only
//!   its content.
//! - **PerSection**: every section reads its content and metadata
//!   concurrently, with no gate.

use crate::slot::{load_section, SectionOutcome, Slot, SlotSender};
use crate::snapshot::{PageSnapshot, SectionView};
use folio_content::{ContentSource, MetaTable, SectionId, SectionMeta, SocialLinks};
use folio_sections::{NumberingPolicy, UnknownVariant};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How section metadata is fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetadataStrategy {
    /// One read of the whole table gates the page
    #[default]
    Bulk,
    /// Each section reads its own metadata
    PerSection,
}

impl MetadataStrategy {
    /// Configuration name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::PerSection => "per-section",
        }
    }
}

impl fmt::Display for MetadataStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetadataStrategy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bulk" => Ok(Self::Bulk),
            "per-section" | "section" => Ok(Self::PerSection),
            other => Err(UnknownVariant::new("metadata strategy", other)),
        }
    }
}

/// A page whose section fetches are in flight
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct MountedPage {
    policy: NumberingPolicy,
    strategy: MetadataStrategy,
    hero: Slot<SectionOutcome>,
    gate: Option<Slot<MetaTable>>,
    sections: Vec<(SectionId, Slot<SectionOutcome>)>,
    social: Slot<SocialLinks>,
}

impl MountedPage {
    /// Spawn every fetch for one page view
    pub fn mount(
        source: Arc<dyn ContentSource>,
        strategy: MetadataStrategy,
        policy: NumberingPolicy,
    ) -> Self {
        info!(%strategy, %policy, "mounting page");

        let (hero_tx, hero) = Slot::channel("hero");
        tokio::spawn(load_section(
            SectionId::Hero,
            Arc::clone(&source),
            Some(SectionMeta::defaults(SectionId::Hero)),
            hero_tx,
        ));

        let (social_tx, social) = Slot::channel("social");
        tokio::spawn(load_social(Arc::clone(&source), social_tx));

        let (senders, sections): (Vec<_>, Vec<_>) = SectionId::NUMBERED
            .iter()
            .map(|&section| {
                let (tx, slot) = Slot::channel(section.key());
                ((section, tx), (section, slot))
            })
            .unzip();

        let gate = match strategy {
            MetadataStrategy::Bulk => {
                let (gate_tx, gate) = Slot::channel("meta_table");
                tokio::spawn(open_gate(source, gate_tx, senders));
                Some(gate)
            }
            MetadataStrategy::PerSection => {
                for (section, tx) in senders {
                    tokio::spawn(load_section(section, Arc::clone(&source), None, tx));
                }
                None
            }
        };

        Self {
            policy,
            strategy,
            hero,
            gate,
            sections,
            social,
        }
    }

    /// Metadata strategy this page was mounted with
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> MetadataStrategy {
        self.strategy
    }

    /// Check if the bulk metadata read is still pending
    #[must_use]
    pub fn is_gated(&self) -> bool {
        self.gate.as_ref().is_some_and(|gate| !gate.is_resolved())
    }

    /// Check if every fetch has published
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.is_gated()
            && self.hero.is_resolved()
            && self.social.is_resolved()
            && self.sections.iter().all(|(_, slot)| slot.is_resolved())
    }

    /// Resolve the page from what has been published so far
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        let hero = SectionView::resolve(SectionId::Hero, self.hero.current());
        let sections = self
            .sections
            .iter()
            .map(|(section, slot)| SectionView::resolve(*section, slot.current()))
            .collect();

        PageSnapshot::build(
            hero,
            self.is_gated(),
            sections,
            self.social.current(),
            self.policy,
        )
    }

    /// Wait up to `budget` for every fetch to publish
    ///
    /// Returns `true` if the page settled within the budget. Unresolved
    /// fetches keep running.
    pub async fn settle(&self, budget: Duration) -> bool {
        let started = Instant::now();
        let all = async {
            tokio::join!(
                self.hero.resolved(),
                self.social.resolved(),
                join_all(self.sections.iter().map(|(_, slot)| slot.resolved())),
            );
        };
        let settled = tokio::time::timeout(budget, all).await.is_ok();

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if settled {
            info!(elapsed_ms, "page settled");
        } else {
            info!(
                elapsed_ms,
                gated = self.is_gated(),
                "render budget exhausted, rendering loading placeholders"
            );
        }
        settled
    }
}

async fn open_gate(
    source: Arc<dyn ContentSource>,
    gate: SlotSender<MetaTable>,
    senders: Vec<(SectionId, SlotSender<SectionOutcome>)>,
) {
    let table = source.meta_table().await;
    debug!(records = table.len(), "metadata gate open");

    let metas: Vec<_> = senders
        .into_iter()
        .map(|(section, tx)| (section, table.get(section), tx))
        .collect();
    if !gate.publish(table) {
        return;
    }

    for (section, meta, tx) in metas {
        tokio::spawn(load_section(section, Arc::clone(&source), Some(meta), tx));
    }
}

async fn load_social(source: Arc<dyn ContentSource>, sender: SlotSender<SocialLinks>) {
    let links = match source.social_links().await {
        Ok(links) => links,
        Err(e) => {
            warn!(error = %e, "social links read failed, hiding sidebar links");
            SocialLinks::default()
        }
    };
    sender.publish(links);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_config_names() {
        assert_eq!("bulk".parse::<MetadataStrategy>().unwrap(), MetadataStrategy::Bulk);
        assert_eq!(
            " Per-Section ".parse::<MetadataStrategy>().unwrap(),
            MetadataStrategy::PerSection
        );
        let err = "eager".parse::<MetadataStrategy>().unwrap_err();
        assert_eq!(err.to_string(), "unknown metadata strategy 'eager'");
    }

    #[test]
    fn strategy_serde_uses_kebab_case() {
        let json = serde_json::to_string(&MetadataStrategy::PerSection).unwrap();
        assert_eq!(json, "\"per-section\"");
        assert_eq!(MetadataStrategy::default(), MetadataStrategy::Bulk);
    }
}
