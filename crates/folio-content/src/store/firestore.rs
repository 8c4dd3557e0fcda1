//! Firestore REST backend
//!
//! Documents come back in Firestore's typed-value encoding:
//!
//! ```json
//! {"name": ".../documents/content/about",
//!  "fields": {"title": {"stringValue": "About Me"},
//!             "paragraphs": {"arrayValue": {"values": [{"stringValue": "..."}]}}}}
//! ```
//!
//! [`decode_document`] flattens that into a plain [`Record`].

use super::DocumentStore;
use crate::error::StoreError;
use crate::record::Record;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: u32 = 100;

/// Connection settings for a Firestore project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirestoreConfig {
    /// API root, overridable for the emulator
    pub endpoint: String,
    /// Google Cloud project id
    pub project_id: String,
    /// Database id
    pub database: String,
    /// Web API key sent as `?key=` (public read rules assumed)
    pub api_key: Option<String>,
}

impl FirestoreConfig {
    /// Create config for a project with default endpoint and database
    #[inline]
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// With a custom endpoint (emulator)
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Base URL of the documents resource
    #[must_use]
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.endpoint.trim_end_matches('/'),
            self.project_id,
            self.database
        )
    }
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            project_id: String::new(),
            database: "(default)".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

/// Firestore documents API client
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreStore {
    /// Create store with a fresh HTTP client
    #[must_use]
    pub fn new(config: FirestoreConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create store sharing an existing HTTP client
    #[inline]
    #[must_use]
    pub fn with_client(client: Client, config: FirestoreConfig) -> Self {
        Self { client, config }
    }

    /// Connection settings
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.config.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    fn name(&self) -> &'static str {
        "firestore"
    }

    async fn get_record(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError> {
        let url = format!("{}/{collection}/{id}", self.config.documents_url());
        let response = self.request(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let document: Document = response.json().await?;
        decode_document(&document.fields, &format!("{collection}/{id}")).map(Some)
    }

    async fn list_records(&self, collection: &str) -> Result<Vec<(String, Record)>, StoreError> {
        let url = format!("{}/{collection}", self.config.documents_url());
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .request(&url)
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await?;
            if response.status() == StatusCode::NOT_FOUND {
                break;
            }
            if !response.status().is_success() {
                return Err(StoreError::Status {
                    status: response.status().as_u16(),
                    url,
                });
            }

            let page: ListResponse = response.json().await?;
            for document in page.documents {
                let id = document_id(&document.name).to_string();
                let record = decode_document(&document.fields, &format!("{collection}/{id}"))?;
                records.push((id, record));
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(collection, count = records.len(), "listed firestore documents");
        Ok(records)
    }
}

/// Last path segment of a document resource name
fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Decode a document's `fields` map into a plain record
///
/// # Errors
/// - `StoreError::Decode` if any field is not a recognised typed value
pub fn decode_document(fields: &Map<String, Value>, location: &str) -> Result<Record, StoreError> {
    fields
        .iter()
        .map(|(name, value)| {
            decode_value(value)
                .map(|decoded| (name.clone(), decoded))
                .map_err(|message| StoreError::decode(format!("{location}.{name}"), message))
        })
        .collect()
}

/// Decode one Firestore typed value
///
/// # Errors
/// Returns a message naming the offending value type.
pub fn decode_value(value: &Value) -> Result<Value, String> {
    let Some((kind, inner)) = value.as_object().and_then(|o| o.iter().next()) else {
        return Err(format!("expected a typed value object, found {value}"));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| format!("booleanValue is not a boolean: {inner}")),
        "integerValue" => {
            // int64 travels as a string
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                Value::Number(n) => n.as_i64(),
                _ => None,
            };
            parsed
                .map(|n| Value::Number(n.into()))
                .ok_or_else(|| format!("integerValue is not an int64: {inner}"))
        }
        "doubleValue" => inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| format!("doubleValue is not a finite number: {inner}")),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| format!("{kind} is not a string: {inner}")),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            values
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        "mapValue" => {
            let empty = Map::new();
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .unwrap_or(&empty);
            fields
                .iter()
                .map(|(k, v)| decode_value(v).map(|d| (k.clone(), d)))
                .collect::<Result<Map<_, _>, _>>()
                .map(Value::Object)
        }
        other => Err(format!("unsupported value type '{other}'")),
    }
}
