//! Testing utilities for the folio workspace
//!
//! Shared fixtures: a populated site, stores that fail or block on demand,
//! and a delivery backend that records what it was given.

#![allow(missing_docs)]

use async_trait::async_trait;
use dashmap::DashMap;
use folio_content::{
    ContentSource, DocumentStore, MemoryStore, Record, StoreContentSource, StoreError,
};
use folio_sections::{ContactMessage, DeliveryError, EmailDelivery};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::watch;

/// A complete site: every section with content and metadata
pub fn sample_bundle() -> Value {
    json!({
        "content": {
            "hero": {
                "intro": "Hi, my name is",
                "name": "Ada Lovelace",
                "subtitle": "I build analytical engines.",
                "description": "Engineer focused on computing machinery."
            },
            "about": {
                "title": "About Me",
                "paragraphs": ["I write programs for machines that do not exist yet.", ""],
                "imageUrl": "/img/ada.jpg"
            },
            "experience": {
                "job2": {"title": "Engineer", "context": "Looms Inc", "date": "1840", "points": ["Punched cards"]},
                "job1": {"title": "Analyst", "context": "Engines Ltd", "date": "1843", "points": ["Note G", " "]}
            },
            "skills": {
                "Frontend": ["React", "TypeScript"],
                "Backend": []
            },
            "projects": {
                "list": [
                    {"id": "engine", "title": "Analytical Engine", "shortDescription": "General purpose",
                     "description": "Mill and store.", "liveUrl": "https://example.com/engine",
                     "skills": ["Brass", ""]},
                    {"id": "notes", "title": "Notes", "shortDescription": "Translations", "liveUrl": " "},
                    {"id": "bernoulli", "title": "Bernoulli", "shortDescription": "First program"},
                    {"id": "loom", "title": "Loom", "shortDescription": "Patterns"},
                    {"id": "", "title": "Untitled sketch", "shortDescription": "Draft"}
                ]
            },
            "testimonials": {
                "sectionTitle": "Kind Words",
                "list": [
                    {"name": "Charles Babbage", "title": "Inventor", "text": "Enchantress of numbers.",
                     "link": {"label": "Website", "url": "https://example.com/charles"}}
                ]
            },
            "social": {
                "links": [
                    "https://github.com/ada",
                    {"name": "LinkedIn", "url": "https://www.linkedin.com/in/ada"},
                    "mailto:ada@engines.dev",
                    "ftp://files.example.com/ada"
                ]
            }
        },
        "sections": {
            "about": {"displayNumber": 1, "enabled": true},
            "experience": {"displayNumber": 2, "enabled": true},
            "skills": {"displayNumber": 3, "enabled": true},
            "projects": {"displayNumber": 4, "enabled": true},
            "testimonials": {"displayNumber": 5, "enabled": true},
            "contact": {"displayNumber": 6, "enabled": true, "description": "My inbox is always open."}
        }
    })
}

/// Store seeded with [`sample_bundle`]
pub fn sample_store() -> MemoryStore {
    MemoryStore::from_bundle(sample_bundle()).unwrap()
}

/// Content source over any store
pub fn source_over(store: impl DocumentStore + 'static) -> Arc<dyn ContentSource> {
    Arc::new(StoreContentSource::new(Arc::new(store)))
}

/// Content source over [`sample_store`]
pub fn sample_source() -> Arc<dyn ContentSource> {
    source_over(sample_store())
}

/// Build a record from a JSON object literal
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(fields) => fields,
        other => panic!("record fixture must be an object, got {other}"),
    }
}

/// Store that fails every read, or only reads of chosen collections
#[derive(Debug)]
pub struct FailingStore {
    inner: Option<Arc<dyn DocumentStore>>,
    failing: Vec<String>,
}

impl FailingStore {
    /// Fail every read
    pub fn new() -> Self {
        Self {
            inner: None,
            failing: Vec::new(),
        }
    }

    /// Pass reads through to `inner` except for collections marked failing
    pub fn wrapping(inner: impl DocumentStore + 'static) -> Self {
        Self {
            inner: Some(Arc::new(inner)),
            failing: Vec::new(),
        }
    }

    /// Fail reads of one collection
    pub fn failing_on(mut self, collection: &str) -> Self {
        self.failing.push(collection.to_string());
        self
    }

    fn target(&self, collection: &str) -> Result<&Arc<dyn DocumentStore>, StoreError> {
        match &self.inner {
            Some(inner) if !self.failing.iter().any(|c| c == collection) => Ok(inner),
            _ => Err(StoreError::Status {
                status: 503,
                url: format!("failing://{collection}"),
            }),
        }
    }
}

impl Default for FailingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn get_record(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError> {
        self.target(collection)?.get_record(collection, id).await
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<(String, Record)>, StoreError> {
        self.target(collection)?.list_records(collection).await
    }
}

/// Store whose reads block until the test releases them
///
/// Gates are keyed `collection/id` for record reads and `collection/*` for
/// list reads. Every read is logged by key in arrival order.
#[derive(Debug)]
pub struct GatedStore {
    inner: Arc<dyn DocumentStore>,
    gates: DashMap<String, watch::Sender<bool>>,
    reads: Mutex<Vec<String>>,
}

impl GatedStore {
    pub fn new(inner: impl DocumentStore + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
            gates: DashMap::new(),
            reads: Mutex::new(Vec::new()),
        }
    }

    /// Block reads of `key` until released
    pub fn hold(&self, key: &str) {
        self.gates
            .entry(key.to_string())
            .or_insert_with(|| watch::channel(false).0);
    }

    /// Builder form of [`GatedStore::hold`]
    pub fn holding(self, key: &str) -> Self {
        self.hold(key);
        self
    }

    /// Let reads of `key` proceed
    pub fn release(&self, key: &str) {
        if let Some(gate) = self.gates.get(key) {
            gate.send_replace(true);
        }
    }

    /// Let every held read proceed
    pub fn release_all(&self) {
        for gate in self.gates.iter() {
            gate.send_replace(true);
        }
    }

    /// Keys of reads that have arrived so far
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().clone()
    }

    /// Check if a read of `key` has arrived
    pub fn was_read(&self, key: &str) -> bool {
        self.reads.lock().iter().any(|k| k == key)
    }

    async fn pass(&self, key: String) {
        let gate = self.gates.get(&key).map(|g| g.subscribe());
        self.reads.lock().push(key);
        if let Some(mut gate) = gate {
            let _ = gate.wait_for(|open| *open).await;
        }
    }
}

#[async_trait]
impl DocumentStore for GatedStore {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn get_record(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError> {
        self.pass(format!("{collection}/{id}")).await;
        self.inner.get_record(collection, id).await
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<(String, Record)>, StoreError> {
        self.pass(format!("{collection}/*")).await;
        self.inner.list_records(collection).await
    }
}

/// Delivery backend that records messages, optionally failing each send
#[derive(Debug, Default)]
pub struct RecordingDelivery {
    messages: Mutex<Vec<ContactMessage>>,
    fail: bool,
}

impl RecordingDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record each message, then reject it
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Messages handed to `send`, in order
    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.lock().clone()
    }

    /// Number of `send` calls
    pub fn calls(&self) -> usize {
        self.messages.lock().len()
    }
}

#[async_trait]
impl EmailDelivery for RecordingDelivery {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        self.messages.lock().push(message.clone());
        if self.fail {
            return Err(DeliveryError::Rejected {
                status: 400,
                body: "rejected by test".to_string(),
            });
        }
        Ok(())
    }
}
