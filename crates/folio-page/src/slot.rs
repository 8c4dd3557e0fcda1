//! Single-assignment result slots
//!
//! A mounted page owns the receiving half of one `watch` channel per fetch.
//! The fetch task owns the sending half and publishes exactly once. When the
//! page is dropped the receivers go with it, so a late publish fails and the
//! result is discarded. The fetch itself is not cancelled.

use folio_content::{ContentSource, SectionContent, SectionId, SectionMeta};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Receiving half: what the page reads
pub struct Slot<T> {
    label: &'static str,
    rx: watch::Receiver<Option<Arc<T>>>,
}

/// Sending half: what the fetch task writes
pub struct SlotSender<T> {
    label: &'static str,
    tx: watch::Sender<Option<Arc<T>>>,
}

impl<T> Slot<T> {
    /// Create a connected sender and slot
    #[must_use]
    pub fn channel(label: &'static str) -> (SlotSender<T>, Slot<T>) {
        let (tx, rx) = watch::channel(None);
        (SlotSender { label, tx }, Slot { label, rx })
    }

    /// Published value, if any
    #[must_use]
    pub fn current(&self) -> Option<Arc<T>> {
        self.rx.borrow().clone()
    }

    /// Check if a value has been published
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Wait until a value is published
    ///
    /// Returns early if the sender is dropped without publishing.
    pub async fn resolved(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(Option::is_some).await.is_err() {
            tracing::debug!(slot = self.label, "fetch ended without a result");
        }
    }
}

impl<T> SlotSender<T> {
    /// Publish the fetch result
    ///
    /// Returns `false` if the page was unmounted and the value was discarded.
    pub fn publish(self, value: T) -> bool {
        match self.tx.send(Some(Arc::new(value))) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(slot = self.label, "page unmounted, discarding late result");
                false
            }
        }
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("label", &self.label)
            .field("resolved", &self.rx.borrow().is_some())
            .finish()
    }
}

impl<T> fmt::Debug for SlotSender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotSender").field("label", &self.label).finish()
    }
}

/// A section's completed fetches
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutcome {
    /// Metadata (defaults when absent or failed)
    pub meta: SectionMeta,
    /// Content (`None` when absent or failed)
    pub content: Option<SectionContent>,
}

/// Fetch one section and publish its outcome
///
/// With `meta` already known (bulk strategy) only content is read; otherwise
/// content and metadata are read concurrently. A failed content read is
/// logged and treated as absent.
pub async fn load_section(
    section: SectionId,
    source: Arc<dyn ContentSource>,
    meta: Option<SectionMeta>,
    sender: SlotSender<SectionOutcome>,
) {
    let content = async {
        match source.content(section).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(%section, error = %e, "content read failed, hiding section");
                None
            }
        }
    };

    let outcome = match meta {
        Some(meta) => SectionOutcome {
            meta,
            content: content.await,
        },
        None => {
            let (content, meta) = tokio::join!(content, source.meta(section));
            SectionOutcome { meta, content }
        }
    };

    tracing::debug!(
        %section,
        enabled = outcome.meta.enabled,
        has_record = outcome.content.is_some(),
        "section loaded"
    );
    sender.publish(outcome);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_then_read() {
        let (tx, slot) = Slot::<u32>::channel("test");
        assert!(!slot.is_resolved());
        assert!(tx.publish(7));
        slot.resolved().await;
        assert_eq!(slot.current().as_deref(), Some(&7));
    }

    #[tokio::test]
    async fn publish_after_drop_is_discarded() {
        let (tx, slot) = Slot::<u32>::channel("test");
        drop(slot);
        assert!(!tx.publish(7));
    }

    #[tokio::test]
    async fn dropped_sender_ends_wait() {
        let (tx, slot) = Slot::<u32>::channel("test");
        drop(tx);
        slot.resolved().await;
        assert!(slot.current().is_none());
    }
}
