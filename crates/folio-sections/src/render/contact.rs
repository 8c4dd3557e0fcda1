use super::{escape, heading, open, CLOSE};
use crate::contact::{ContactForm, ContactStatus, DEFAULT_DESCRIPTION};
use crate::links::UiLinks;
use folio_content::{SectionId, SectionMeta};

/// Section heading
pub const TITLE: &str = "What's Next?";

/// Where the form posts
pub const FORM_ACTION: &str = "/contact";

/// Contact section state for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactView {
    /// Lead paragraph
    pub description: Option<String>,
    /// Whether the form has been revealed
    pub open: bool,
    /// Field values to show
    pub form: ContactForm,
    /// Inline status
    pub status: ContactStatus,
}

impl ContactView {
    /// Closed form with the lead paragraph from metadata
    #[must_use]
    pub fn from_meta(meta: &SectionMeta) -> Self {
        Self {
            description: meta.description.clone(),
            ..Self::default()
        }
    }

    /// With form revealed or hidden
    #[inline]
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// With the outcome of a submission (always revealed)
    #[must_use]
    pub fn with_submission(mut self, form: ContactForm, status: ContactStatus) -> Self {
        self.open = true;
        self.form = form;
        self.status = status;
        self
    }

    /// Lead paragraph, default copy when metadata has none
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// Render the contact section
#[must_use]
pub fn render(view: &ContactView, ordinal: Option<&str>, links: &dyn UiLinks) -> String {
    let mut html = open(SectionId::Contact);
    html.push_str(&heading(ordinal, TITLE));
    html.push_str(&format!(
        r#"<p class="contact-lead">{}</p>"#,
        escape(view.description())
    ));

    if !view.open {
        html.push_str(&format!(
            r#"<a class="button" href="{}">Say Hello</a>"#,
            escape(&links.contact_form(true))
        ));
        html.push_str(CLOSE);
        return html;
    }

    html.push_str(&format!(
        r#"<form class="contact-form" method="post" action="{FORM_ACTION}">
<input type="text" name="name" placeholder="Your Name" value="{name}">
<input type="email" name="email" placeholder="Your Email" value="{email}">
<textarea name="message" rows="5" placeholder="Your Message">{message}</textarea>
<button type="submit" class="button">Send Message</button>
</form>"#,
        name = escape(&view.form.name),
        email = escape(&view.form.email),
        message = escape(&view.form.message),
    ));

    if let Some(message) = view.status.message() {
        let class = if view.status.is_error() {
            "contact-status error"
        } else {
            "contact-status success"
        };
        html.push_str(&format!(
            r#"<p class="{class}" role="status">{}</p>"#,
            escape(message)
        ));
    }

    html.push_str(CLOSE);
    html
}
