use crate::record::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Link under a testimonial (e.g. the project it refers to)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialLink {
    /// Link text
    #[serde(deserialize_with = "lenient::string")]
    pub label: String,
    /// Target URL
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
}

impl TestimonialLink {
    /// Check if the link can be rendered
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// One testimonial card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TestimonialRecord")]
pub struct Testimonial {
    /// Author name
    pub name: String,
    /// Author role, optional
    pub title: String,
    /// Author portrait reference
    pub image_url: String,
    /// Quoted text
    pub quote: String,
    /// Links shown under the quote
    pub links: Vec<TestimonialLink>,
}

/// Stored shape of a testimonial; `links` and a single `link` may coexist
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TestimonialRecord {
    #[serde(deserialize_with = "lenient::string")]
    name: String,
    #[serde(deserialize_with = "lenient::string")]
    title: String,
    #[serde(alias = "image", deserialize_with = "lenient::string")]
    image_url: String,
    #[serde(alias = "text", deserialize_with = "lenient::string")]
    quote: String,
    #[serde(deserialize_with = "links")]
    links: Vec<TestimonialLink>,
    #[serde(deserialize_with = "links")]
    link: Vec<TestimonialLink>,
}

impl From<TestimonialRecord> for Testimonial {
    fn from(record: TestimonialRecord) -> Self {
        let mut links = record.links;
        links.extend(record.link);
        Self {
            name: record.name,
            title: record.title,
            image_url: record.image_url,
            quote: record.quote,
            links,
        }
    }
}

impl Testimonial {
    /// Check if the card has anything to show
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.name.trim().is_empty()
            || !self.quote.trim().is_empty()
            || !self.image_url.trim().is_empty()
    }

    /// Links with a non-blank URL
    pub fn links(&self) -> impl Iterator<Item = &TestimonialLink> {
        self.links.iter().filter(|l| l.is_usable())
    }
}

/// Testimonials record: `{sectionTitle?, list: [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialsContent {
    /// Heading override
    #[serde(deserialize_with = "lenient::string")]
    pub section_title: String,
    /// Testimonials in display order
    #[serde(alias = "testimonials")]
    pub list: Vec<Testimonial>,
}

impl TestimonialsContent {
    /// Heading, `Testimonials` when the record leaves it blank
    #[must_use]
    pub fn title(&self) -> &str {
        match self.section_title.trim() {
            "" => "Testimonials",
            title => title,
        }
    }

    /// Testimonials with something to show
    pub fn with_content(&self) -> impl Iterator<Item = &Testimonial> {
        self.list.iter().filter(|t| t.has_content())
    }
}

fn links<'de, D>(deserializer: D) -> Result<Vec<TestimonialLink>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(_) => vec![value],
        _ => Vec::new(),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_single_link_and_aliases() {
        let content: TestimonialsContent = serde_json::from_value(json!({
            "sectionTitle": "Kind Words",
            "list": [{
                "name": "Ada",
                "image": "/img/ada.png",
                "text": "Great to work with.",
                "link": {"label": "Project", "url": "https://x.dev"}
            }]
        }))
        .unwrap();
        let card = &content.list[0];
        assert_eq!(content.title(), "Kind Words");
        assert_eq!(card.image_url, "/img/ada.png");
        assert_eq!(card.quote, "Great to work with.");
        assert_eq!(card.links().count(), 1);
    }

    #[test]
    fn accepts_link_lists_and_drops_blank_urls() {
        let card: Testimonial = serde_json::from_value(json!({
            "name": "Bo",
            "links": [{"label": "a", "url": "https://a.dev"}, {"label": "b", "url": ""}, 7]
        }))
        .unwrap();
        assert_eq!(card.links.len(), 2);
        assert_eq!(card.links().count(), 1);
    }

    #[test]
    fn link_and_links_are_merged() {
        let content: TestimonialsContent = serde_json::from_value(json!({
            "list": [{
                "name": "Cy",
                "links": [{"label": "Repo", "url": "https://repo.dev"}],
                "link": {"label": "Demo", "url": "https://demo.dev"}
            }]
        }))
        .unwrap();
        let labels: Vec<&str> = content.list[0].links().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Repo", "Demo"]);
    }

    #[test]
    fn default_title() {
        assert_eq!(TestimonialsContent::default().title(), "Testimonials");
    }

    #[test]
    fn blank_cards_are_filtered() {
        let content = TestimonialsContent {
            list: vec![
                Testimonial::default(),
                Testimonial {
                    quote: "Solid.".into(),
                    ..Testimonial::default()
                },
            ],
            ..TestimonialsContent::default()
        };
        assert_eq!(content.with_content().count(), 1);
    }
}
