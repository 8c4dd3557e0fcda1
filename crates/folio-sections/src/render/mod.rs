//! HTML renderers
//!
//! Each renderer is a pure function of its content, heading ordinal and UI
//! state, returning a `<section>` fragment. Hidden sections produce no
//! output at all; that decision is made by the caller before a renderer is
//! reached.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod testimonials;

use folio_content::SectionId;

/// Escape text for HTML body and attribute positions
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Placeholder text while a section's fetch is outstanding
#[must_use]
pub fn loading_label(section: SectionId) -> &'static str {
    match section {
        SectionId::Hero => "Loading hero content...",
        SectionId::About => "Loading about section...",
        SectionId::Experience => "Loading experience...",
        SectionId::Skills => "Loading skills...",
        SectionId::Projects => "Loading projects...",
        SectionId::Testimonials => "Loading testimonials...",
        SectionId::Contact => "Loading contact...",
    }
}

/// Neutral placeholder inside the section frame
#[must_use]
pub fn loading(section: SectionId) -> String {
    format!(
        r#"<section id="{id}" class="section section-loading" aria-busy="true">{label}</section>"#,
        id = section.key(),
        label = loading_label(section),
    )
}

/// Section heading with optional ordinal
#[must_use]
pub fn heading(ordinal: Option<&str>, title: &str) -> String {
    let numeral = ordinal
        .map(|o| format!(r#"<span class="section-number">{}</span>"#, escape(o)))
        .unwrap_or_default();
    format!(
        r#"<div class="section-heading"><h2>{numeral}{title}</h2><div class="section-rule"></div></div>"#,
        title = escape(title),
    )
}

/// Open a section frame
fn open(section: SectionId) -> String {
    format!(r#"<section id="{}" class="section">"#, section.key())
}

const CLOSE: &str = "</section>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn loading_placeholder() {
        let html = loading(SectionId::Experience);
        assert!(html.contains(r#"id="experience""#));
        assert!(html.contains("Loading experience..."));
        assert_eq!(loading_label(SectionId::About), "Loading about section...");
    }

    #[test]
    fn heading_with_and_without_ordinal() {
        let html = heading(Some("02."), "Where I've Worked");
        assert!(html.contains(r#"<span class="section-number">02.</span>Where I&#39;ve Worked"#));
        assert!(!heading(None, "Skills").contains("section-number"));
    }
}
