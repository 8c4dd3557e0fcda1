//! Typed section content
//!
//! Each section's record decodes into its own type. Decoding is lenient about
//! field values (nulls and wrong scalars become blank) but strict about shape
//! where the shape carries meaning, e.g. projects must be a list.

mod about;
mod experience;
mod hero;
mod projects;
mod skills;
mod social;
mod testimonials;

pub use about::AboutContent;
pub use experience::{ExperienceContent, ExperienceEntry};
pub use hero::HeroContent;
pub use projects::{Project, ProjectsContent};
pub use skills::{SkillCategory, SkillsContent};
pub use social::{SocialLink, SocialLinks, MAX_SOCIAL_LINKS};
pub use testimonials::{Testimonial, TestimonialLink, TestimonialsContent};

use crate::error::ContentError;
use crate::record::Record;
use crate::section::SectionId;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded content of one section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    /// Hero banner
    Hero(HeroContent),
    /// About me
    About(AboutContent),
    /// Work experience
    Experience(ExperienceContent),
    /// Skills by category
    Skills(SkillsContent),
    /// Projects gallery
    Projects(ProjectsContent),
    /// Testimonials
    Testimonials(TestimonialsContent),
}

impl SectionContent {
    /// Decode a section's record
    ///
    /// # Errors
    /// - `ContentError::Decode` if the record does not have the section's shape,
    ///   or the section has no content record (contact)
    pub fn decode(section: SectionId, record: Record) -> Result<Self, ContentError> {
        match section {
            SectionId::Hero => from_record(section, record).map(Self::Hero),
            SectionId::About => from_record(section, record).map(Self::About),
            SectionId::Experience => Ok(Self::Experience(ExperienceContent::from_record(&record))),
            SectionId::Skills => Ok(Self::Skills(SkillsContent::from_record(&record))),
            SectionId::Projects => from_record(section, record).map(Self::Projects),
            SectionId::Testimonials => from_record(section, record).map(Self::Testimonials),
            SectionId::Contact => Err(ContentError::decode(
                section,
                "contact has no content record",
            )),
        }
    }

    /// Section this content belongs to
    #[inline]
    #[must_use]
    pub fn section(&self) -> SectionId {
        match self {
            Self::Hero(_) => SectionId::Hero,
            Self::About(_) => SectionId::About,
            Self::Experience(_) => SectionId::Experience,
            Self::Skills(_) => SectionId::Skills,
            Self::Projects(_) => SectionId::Projects,
            Self::Testimonials(_) => SectionId::Testimonials,
        }
    }
}

fn from_record<T: DeserializeOwned>(section: SectionId, record: Record) -> Result<T, ContentError> {
    serde_json::from_value(Value::Object(record)).map_err(|e| ContentError::decode(section, e))
}
