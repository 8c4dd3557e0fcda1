use super::{escape, heading, open, CLOSE};
use folio_content::{SectionId, Testimonial, TestimonialsContent};

/// Render testimonial cards
#[must_use]
pub fn render(testimonials: &TestimonialsContent, ordinal: Option<&str>) -> String {
    let mut html = open(SectionId::Testimonials);
    html.push_str(&heading(ordinal, testimonials.title()));
    for testimonial in testimonials.with_content() {
        html.push_str(&card(testimonial));
    }
    html.push_str(CLOSE);
    html
}

fn card(t: &Testimonial) -> String {
    let mut html = String::from(r#"<figure class="testimonial">"#);
    if !t.image_url.trim().is_empty() {
        html.push_str(&format!(
            r#"<img src="{}" alt="{}">"#,
            escape(t.image_url.trim()),
            escape(t.name.trim())
        ));
    }
    html.push_str("<figcaption>");
    html.push_str(&format!("<h3>{}</h3>", escape(t.name.trim())));
    if !t.title.trim().is_empty() {
        html.push_str(&format!(
            r#"<p class="testimonial-title">{}</p>"#,
            escape(t.title.trim())
        ));
    }
    html.push_str("</figcaption>");
    if !t.quote.trim().is_empty() {
        html.push_str(&format!(
            "<blockquote>\u{201c}{}\u{201d}</blockquote>",
            escape(t.quote.trim())
        ));
    }

    let links: Vec<_> = t.links().collect();
    if !links.is_empty() {
        html.push_str(r#"<div class="testimonial-links">"#);
        for link in links {
            let label = match link.label.trim() {
                "" => link.url.trim(),
                label => label,
            };
            html.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape(link.url.trim()),
                escape(label)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</figure>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::TestimonialLink;

    #[test]
    fn renders_cards_and_default_title() {
        let content = TestimonialsContent {
            list: vec![
                Testimonial {
                    name: "Charles".into(),
                    quote: "Remarkable.".into(),
                    links: vec![TestimonialLink {
                        label: "Engine".into(),
                        url: "https://engine.dev".into(),
                    }],
                    ..Testimonial::default()
                },
                Testimonial::default(),
            ],
            ..TestimonialsContent::default()
        };
        let html = render(&content, Some("05."));
        assert!(html.contains("05.</span>Testimonials"));
        assert_eq!(html.matches("<figure").count(), 1);
        assert!(html.contains("\u{201c}Remarkable.\u{201d}"));
        assert!(html.contains(">Engine</a>"));
        assert!(!html.contains("testimonial-title"));
    }

    #[test]
    fn custom_section_title() {
        let content = TestimonialsContent {
            section_title: "Kind Words".into(),
            ..TestimonialsContent::default()
        };
        assert!(render(&content, None).contains("<h2>Kind Words</h2>"));
    }
}
