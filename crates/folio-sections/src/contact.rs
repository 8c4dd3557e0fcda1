//! Contact form state and submission
//!
//! The form sits behind a `Say Hello` reveal. A submission is validated
//! locally, then handed to an [`EmailDelivery`] backend exactly once:
//!
//! ```text
//! any field blank    → "All fields are required."   (delivery not invoked, fields kept)
//! delivery succeeds  → "Message sent successfully!" (fields cleared)
//! delivery fails     → "Failed to send ..."         (fields kept)
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Shown when a field is blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";
/// Shown after a successful delivery
pub const SENT_MESSAGE: &str = "Message sent successfully!";
/// Shown when delivery fails
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send the message. Please try again later.";

/// Lead paragraph when section metadata has no description
pub const DEFAULT_DESCRIPTION: &str = "I'm currently looking for new opportunities. If you're \
interested in collaborating or just want to say hello, feel free to drop a message and I'll \
respond as soon as I can!";

/// Form fields as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Create form from fields
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check that no field is blank after trimming
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Build the outgoing message, if every field is filled
    #[must_use]
    pub fn to_message(&self) -> Option<ContactMessage> {
        self.is_complete().then(|| ContactMessage {
            id: Ulid::new(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            submitted_at: Utc::now(),
        })
    }
}

/// A validated message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    /// Submission id (for log correlation)
    pub id: Ulid,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
    /// When the form was submitted
    pub submitted_at: DateTime<Utc>,
}

/// Feedback shown under the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A field was blank
    MissingFields,
    /// Delivery succeeded
    Sent,
    /// Delivery failed
    Failed,
}

impl ContactStatus {
    /// Inline message for the status
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::MissingFields => Some(REQUIRED_FIELDS_MESSAGE),
            Self::Sent => Some(SENT_MESSAGE),
            Self::Failed => Some(DELIVERY_FAILED_MESSAGE),
        }
    }

    /// Check if the status reports a problem
    #[inline]
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::MissingFields | Self::Failed)
    }
}

/// Errors from an email delivery backend
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// Backend credentials are missing
    #[error("email delivery is not configured: {0}")]
    NotConfigured(String),

    /// Request could not be completed
    #[error("email transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Provider answered with an error
    #[error("email provider rejected the message ({status}): {body}")]
    Rejected {
        /// HTTP status
        status: u16,
        /// Provider response body
        body: String,
    },
}

impl DeliveryError {
    /// Wrap a transport failure
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(source))
    }

    /// Check if the backend was never set up
    #[inline]
    #[must_use]
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}

/// Outbound delivery of contact messages
#[async_trait]
pub trait EmailDelivery: Send + Sync + std::fmt::Debug {
    /// Backend name (for logs)
    fn name(&self) -> &'static str;

    /// Deliver one message
    ///
    /// # Errors
    /// Returns `DeliveryError` if the message was not accepted.
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

/// Result of one submission: the form to redisplay and its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Fields to show (cleared on success)
    pub form: ContactForm,
    /// Inline status
    pub status: ContactStatus,
}

/// Validate and deliver a submission
///
/// Delivery is invoked only for a complete form, and at most once.
pub async fn submit(form: ContactForm, delivery: &dyn EmailDelivery) -> Submission {
    let Some(message) = form.to_message() else {
        tracing::debug!("contact submission rejected: blank fields");
        return Submission {
            form,
            status: ContactStatus::MissingFields,
        };
    };

    match delivery.send(&message).await {
        Ok(()) => {
            tracing::info!(id = %message.id, backend = delivery.name(), "contact message delivered");
            Submission {
                form: ContactForm::default(),
                status: ContactStatus::Sent,
            }
        }
        Err(e) => {
            tracing::warn!(id = %message.id, backend = delivery.name(), error = %e, "contact delivery failed");
            Submission {
                form,
                status: ContactStatus::Failed,
            }
        }
    }
}
