//! Section visibility resolution
//!
//! A section renders only when it is enabled and has content:
//!
//! ```text
//! fetch outstanding          → Loading
//! enabled && has_content     → Visible
//! otherwise                  → Hidden
//! ```
//!
//! A failed content read arrives here as absent content, so it hides the
//! section exactly like a missing record does.

use folio_content::{
    AboutContent, ExperienceContent, HeroContent, ProjectsContent, SectionContent, SectionId,
    SectionMeta, SkillsContent, TestimonialsContent,
};
use serde::Serialize;

/// Whether decoded content has anything worth rendering
pub trait HasContent {
    /// Check for at least one non-blank, renderable value
    fn has_content(&self) -> bool;
}

impl HasContent for HeroContent {
    fn has_content(&self) -> bool {
        !self.is_blank()
    }
}

impl HasContent for AboutContent {
    fn has_content(&self) -> bool {
        !self.title.trim().is_empty() || self.paragraphs().next().is_some() || self.image().is_some()
    }
}

impl HasContent for ExperienceContent {
    fn has_content(&self) -> bool {
        self.with_content().next().is_some()
    }
}

impl HasContent for SkillsContent {
    fn has_content(&self) -> bool {
        self.selectable().next().is_some()
    }
}

impl HasContent for ProjectsContent {
    fn has_content(&self) -> bool {
        self.with_content().next().is_some()
    }
}

impl HasContent for TestimonialsContent {
    fn has_content(&self) -> bool {
        self.with_content().next().is_some()
    }
}

impl HasContent for SectionContent {
    fn has_content(&self) -> bool {
        match self {
            Self::Hero(c) => c.has_content(),
            Self::About(c) => c.has_content(),
            Self::Experience(c) => c.has_content(),
            Self::Skills(c) => c.has_content(),
            Self::Projects(c) => c.has_content(),
            Self::Testimonials(c) => c.has_content(),
        }
    }
}

impl<T: HasContent> HasContent for Option<T> {
    fn has_content(&self) -> bool {
        self.as_ref().is_some_and(HasContent::has_content)
    }
}

/// Display state of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Fetch still outstanding; render a neutral placeholder
    Loading,
    /// Disabled or empty; render nothing
    Hidden,
    /// Render the section
    Visible,
}

impl Visibility {
    /// Check if the section renders its content
    #[inline]
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    /// Check if the section is still waiting on a fetch
    #[inline]
    #[must_use]
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    /// Status label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }
}

impl From<bool> for Visibility {
    fn from(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

/// Resolve a section whose fetches have completed
///
/// Contact is gated by its enabled flag alone. The hero has no metadata and
/// is gated by its content alone.
#[must_use]
pub fn resolve(section: SectionId, meta: &SectionMeta, content: Option<&SectionContent>) -> Visibility {
    let enabled = !section.has_metadata() || meta.enabled;
    let has_content = !section.has_content_record() || content.is_some_and(HasContent::has_content);

    let visibility = Visibility::from(enabled && has_content);
    tracing::debug!(%section, enabled, has_content, state = visibility.as_str(), "section resolved");
    visibility
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{ExperienceEntry, Project, SkillCategory, Testimonial};

    fn enabled(section: SectionId) -> SectionMeta {
        SectionMeta::defaults(section)
    }

    fn disabled(section: SectionId) -> SectionMeta {
        SectionMeta::defaults(section).with_enabled(false)
    }

    fn about(title: &str) -> SectionContent {
        SectionContent::About(AboutContent {
            title: title.to_string(),
            ..AboutContent::default()
        })
    }

    #[test]
    fn blank_content_hides_enabled_section() {
        let section = SectionId::About;
        assert_eq!(resolve(section, &enabled(section), Some(&about("  "))), Visibility::Hidden);
        assert_eq!(resolve(section, &enabled(section), None), Visibility::Hidden);
    }

    #[test]
    fn disabled_hides_section_with_content() {
        let section = SectionId::About;
        assert_eq!(resolve(section, &disabled(section), Some(&about("Me"))), Visibility::Hidden);
        assert_eq!(resolve(section, &enabled(section), Some(&about("Me"))), Visibility::Visible);
    }

    #[test]
    fn contact_is_gated_by_flag_only() {
        let section = SectionId::Contact;
        assert!(resolve(section, &enabled(section), None).is_visible());
        assert!(!resolve(section, &disabled(section), None).is_visible());
    }

    #[test]
    fn hero_is_gated_by_content_only() {
        let section = SectionId::Hero;
        let hero = SectionContent::Hero(HeroContent {
            name: "Ada".into(),
            ..HeroContent::default()
        });
        assert!(resolve(section, &disabled(section), Some(&hero)).is_visible());
        assert!(!resolve(section, &enabled(section), None).is_visible());
    }

    #[test]
    fn experience_needs_a_non_blank_entry() {
        let blank = ExperienceContent::from(vec![ExperienceEntry {
            points: vec![" ".into()],
            ..ExperienceEntry::default()
        }]);
        assert!(!blank.has_content());

        let filled = ExperienceContent::from(vec![ExperienceEntry {
            points: vec!["Shipped".into()],
            ..ExperienceEntry::default()
        }]);
        assert!(filled.has_content());
    }

    #[test]
    fn skills_need_a_selectable_category() {
        let empty = SkillsContent::from(vec![SkillCategory::new("Backend", Vec::<String>::new())]);
        assert!(!empty.has_content());
        let filled = SkillsContent::from(vec![SkillCategory::new("Frontend", ["React"])]);
        assert!(filled.has_content());
    }

    #[test]
    fn projects_and_testimonials_need_a_card() {
        assert!(!ProjectsContent::from(vec![Project::default()]).has_content());
        let testimonials = TestimonialsContent {
            list: vec![Testimonial {
                name: "Bo".into(),
                ..Testimonial::default()
            }],
            ..TestimonialsContent::default()
        };
        assert!(testimonials.has_content());
    }

    #[test]
    fn about_image_alone_counts() {
        let about = AboutContent {
            image_url: "/me.jpg".into(),
            ..AboutContent::default()
        };
        assert!(about.has_content());
        assert!(!None::<AboutContent>.has_content());
    }
}
