//! Document shell around the sections
//!
//! Navigation, social sidebar and footer. The shell has no fetches of its
//! own; it is filled from a snapshot by the composer.

use folio_content::{SectionId, SocialLinks};
use folio_sections::render::escape;
use folio_sections::social::iconed;
use folio_sections::ThemeConfig;
use serde::{Deserialize, Serialize};

/// Shown in place of every gated section while metadata loads
pub const GATE_LABEL: &str = "Loading sections...";

/// Site owner details for the footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    /// Display name
    pub name: String,
    /// Public contact address
    pub email: String,
    /// Profile linked from the name
    pub profile_url: String,
    /// Downloadable resume, shown in the navigation
    pub resume_url: Option<String>,
}

impl Owner {
    /// Create owner with name and email
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Set profile link
    #[inline]
    #[must_use]
    pub fn with_profile_url(mut self, url: impl Into<String>) -> Self {
        self.profile_url = url.into();
        self
    }

    /// Set resume link
    #[inline]
    #[must_use]
    pub fn with_resume_url(mut self, url: impl Into<String>) -> Self {
        self.resume_url = Some(url.into());
        self
    }
}

/// Navigation label of a section below the hero
#[must_use]
pub fn nav_label(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => "Home",
        SectionId::About => "About",
        SectionId::Experience => "Experience",
        SectionId::Skills => "Skills",
        SectionId::Projects => "Projects",
        SectionId::Testimonials => "Testimonials",
        SectionId::Contact => "Contact",
    }
}

/// Page-level placeholder while the metadata gate is pending
#[must_use]
pub fn gate_placeholder() -> String {
    format!(r#"<div class="page-loading" aria-busy="true">{GATE_LABEL}</div>"#)
}

/// Parts of a page ready to be wrapped
#[derive(Debug, Clone, Copy)]
pub struct Shell<'a> {
    /// Theme applied to the document root
    pub theme: &'a ThemeConfig,
    /// Footer details
    pub owner: &'a Owner,
    /// Visible sections and their formatted ordinals
    pub nav: &'a [(SectionId, Option<String>)],
    /// Sidebar links, `None` while loading
    pub social: Option<&'a SocialLinks>,
}

impl Shell<'_> {
    /// Wrap rendered sections into a full document
    #[must_use]
    pub fn document(&self, main: &str) -> String {
        let title = match self.owner.name.trim() {
            "" => "Portfolio".to_string(),
            name => escape(name),
        };

        let mut html = String::with_capacity(main.len() + 2048);
        html.push_str(&format!(
            r#"<!DOCTYPE html>
<html lang="en" class="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
"#,
            theme = self.theme.mode.css_class(),
        ));
        html.push_str(&self.sidebar());
        html.push_str(&self.navigation());
        html.push_str(r#"<main class="page">"#);
        html.push_str(main);
        html.push_str("</main>\n");
        html.push_str(&self.footer());
        html.push_str("</body>\n</html>\n");
        html
    }

    fn navigation(&self) -> String {
        let mut html = String::from(r#"<header class="navbar"><nav><ul>"#);
        for (section, ordinal) in self.nav {
            let numeral = ordinal
                .as_deref()
                .map(|o| format!(r#"<span class="nav-number">{}</span>"#, escape(o)))
                .unwrap_or_default();
            html.push_str(&format!(
                r##"<li><a href="#{id}">{numeral}{label}</a></li>"##,
                id = section.key(),
                label = nav_label(*section),
            ));
        }
        if let Some(resume) = self.owner.resume_url.as_deref().filter(|u| !u.trim().is_empty()) {
            html.push_str(&format!(
                r#"<li><a class="button" href="{}" download>Resume</a></li>"#,
                escape(resume)
            ));
        }
        html.push_str("</ul>");
        if self.theme.toggle_enabled {
            html.push_str(r#"<button class="theme-toggle" type="button" aria-label="Toggle theme"></button>"#);
        }
        html.push_str("</nav></header>\n");
        html
    }

    fn sidebar(&self) -> String {
        let mut html = String::from(r#"<aside class="social-sidebar">"#);
        if let Some(social) = self.social {
            for (link, icon) in iconed(&social.links) {
                html.push_str(&format!(
                    r#"<a class="social-link icon-{icon}" href="{url}" target="_blank" rel="noopener noreferrer" title="{label}" aria-label="{label}"></a>"#,
                    icon = icon.as_str(),
                    url = escape(&link.url),
                    label = escape(link.label()),
                ));
            }
        }
        html.push_str(r#"<div class="sidebar-rule"></div></aside>"#);
        html.push('\n');
        html
    }

    fn footer(&self) -> String {
        let owner = self.owner;
        let mut html = String::from(r#"<footer class="footer">"#);
        let name = owner.name.trim();
        if !name.is_empty() {
            let name = escape(name);
            let credit = if owner.profile_url.trim().is_empty() {
                name
            } else {
                format!(
                    r#"<a href="{}" target="_blank">{name}</a>"#,
                    escape(owner.profile_url.trim())
                )
            };
            html.push_str(&format!("<p>Designed &amp; Built by {credit}</p>"));
        }
        if !owner.email.trim().is_empty() {
            let email = escape(owner.email.trim());
            html.push_str(&format!(r#"<p><a href="mailto:{email}">{email}</a></p>"#));
        }
        html.push_str("</footer>\n");
        html
    }
}
