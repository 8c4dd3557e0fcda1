//! Hero banner (never numbered)

use super::{escape, open, CLOSE};
use folio_content::{HeroContent, SectionId};

/// Render the hero banner
#[must_use]
pub fn render(hero: &HeroContent) -> String {
    let mut html = open(SectionId::Hero);
    for (class, tag, text) in [
        ("hero-intro", "p", &hero.intro),
        ("hero-name", "h1", &hero.name),
        ("hero-subtitle", "h2", &hero.subtitle),
        ("hero-description", "p", &hero.description),
    ] {
        if !text.trim().is_empty() {
            html.push_str(&format!(r#"<{tag} class="{class}">{}</{tag}>"#, escape(text.trim())));
        }
    }
    html.push_str(CLOSE);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_present_fields_only() {
        let html = render(&HeroContent {
            intro: "Hi, my name is".into(),
            name: "Ada <Lovelace>".into(),
            ..HeroContent::default()
        });
        assert!(html.contains(r#"<h1 class="hero-name">Ada &lt;Lovelace&gt;</h1>"#));
        assert!(!html.contains("hero-subtitle"));
        assert!(!html.contains("section-number"));
    }
}
