//! Email delivery backends
//!
//! - [`EmailJsDelivery`]: EmailJS REST API
//! - [`LogOnlyDelivery`]: logs the message and accepts it (local runs)

use async_trait::async_trait;
use folio_sections::{ContactMessage, DeliveryError, EmailDelivery};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS account settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    /// Send endpoint
    pub endpoint: String,
    /// Email service id
    pub service_id: String,
    /// Template id
    pub template_id: String,
    /// Public key (sent as `user_id`)
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

impl EmailJsConfig {
    /// Create config from account ids
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            ..Self::default()
        }
    }

    /// With a custom endpoint
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Names of required settings that are blank
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    message: &'a str,
}

/// Sends contact messages through EmailJS
#[derive(Debug, Clone)]
pub struct EmailJsDelivery {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsDelivery {
    /// Create backend with a fresh HTTP client
    #[must_use]
    pub fn new(config: EmailJsConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create backend sharing an existing HTTP client
    #[inline]
    #[must_use]
    pub fn with_client(client: Client, config: EmailJsConfig) -> Self {
        Self { client, config }
    }

    /// Account settings
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }
}

#[async_trait]
impl EmailDelivery for EmailJsDelivery {
    fn name(&self) -> &'static str {
        "emailjs"
    }

    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let missing = self.config.missing();
        if !missing.is_empty() {
            return Err(DeliveryError::NotConfigured(missing.join(", ")));
        }

        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                user_name: &message.name,
                user_email: &message.email,
                message: &message.message,
            },
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(DeliveryError::transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = rejection_body(response.text().await);
        warn!(
            id = %message.id,
            status = status.as_u16(),
            reason = %body,
            "emailjs rejected message"
        );
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

fn rejection_body(read: Result<String, reqwest::Error>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            debug!(error = %e, "cannot read emailjs response body");
            String::new()
        }
    }
}

/// Accepts every message and logs it
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnlyDelivery;

#[async_trait]
impl EmailDelivery for LogOnlyDelivery {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        info!(
            id = %message.id,
            from = %message.email,
            chars = message.message.chars().count(),
            "contact message accepted without delivery"
        );
        Ok(())
    }
}
