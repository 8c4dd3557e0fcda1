use super::{escape, heading, open, CLOSE};
use folio_content::{AboutContent, SectionId};

/// Render the about section
///
/// The heading is the record's title, `About` when blank.
#[must_use]
pub fn render(about: &AboutContent, ordinal: Option<&str>) -> String {
    let title = match about.title.trim() {
        "" => "About",
        title => title,
    };

    let mut html = open(SectionId::About);
    html.push_str(&heading(ordinal, title));
    html.push_str(r#"<div class="about-body"><div class="about-text">"#);
    for paragraph in about.paragraphs() {
        html.push_str(&format!("<p>{}</p>", escape(paragraph)));
    }
    html.push_str("</div>");
    if let Some(image) = about.image() {
        html.push_str(&format!(
            r#"<img class="about-image" src="{}" alt="{}">"#,
            escape(image),
            escape(title)
        ));
    }
    html.push_str("</div>");
    html.push_str(CLOSE);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraphs_and_image() {
        let html = render(
            &AboutContent {
                title: "About Me".into(),
                paragraphs: vec!["One".into(), " ".into(), "Two".into()],
                image_url: "/img/me.jpg".into(),
            },
            Some("01."),
        );
        assert!(html.contains("01.</span>About Me"));
        assert_eq!(html.matches("<p>").count(), 2);
        assert!(html.contains(r#"src="/img/me.jpg""#));
    }

    #[test]
    fn no_image_no_tag() {
        let html = render(
            &AboutContent {
                paragraphs: vec!["Only text".into()],
                ..AboutContent::default()
            },
            None,
        );
        assert!(!html.contains("<img"));
        assert!(html.contains("<h2>About"));
    }
}
