//! Page composition
//!
//! The composer mounts a page for each request, waits up to the render
//! budget, then renders whatever resolved. Numbering policy, ordinal
//! format, metadata strategy and theme are fixed per process.

use crate::mount::{MetadataStrategy, MountedPage};
use crate::query::PageQuery;
use crate::shell::{gate_placeholder, Owner, Shell};
use crate::snapshot::{PageSnapshot, SectionView};
use folio_content::{ContentSource, SectionContent, SectionId};
use folio_sections::render;
use folio_sections::{
    ContactView, GalleryView, NumberingPolicy, OrdinalFormat, Submission, TabSelection,
    ThemeConfig, Visibility,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default wait for sections before rendering placeholders
pub const DEFAULT_RENDER_BUDGET: Duration = Duration::from_millis(1500);

/// Process-wide presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Heading numbering policy
    pub policy: NumberingPolicy,
    /// Heading ordinal format
    pub format: OrdinalFormat,
    /// Metadata fetch strategy
    pub strategy: MetadataStrategy,
    /// Theme
    pub theme: ThemeConfig,
    /// Footer details
    pub owner: Owner,
    /// Longest wait for fetches before rendering
    #[serde(skip)]
    pub render_budget: Duration,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            policy: NumberingPolicy::default(),
            format: OrdinalFormat::default(),
            strategy: MetadataStrategy::default(),
            theme: ThemeConfig::forced_light(),
            owner: Owner::default(),
            render_budget: DEFAULT_RENDER_BUDGET,
        }
    }
}

impl PageSettings {
    /// Set numbering policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: NumberingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set ordinal format
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: OrdinalFormat) -> Self {
        self.format = format;
        self
    }

    /// Set metadata strategy
    #[inline]
    #[must_use]
    pub fn with_strategy(mut self, strategy: MetadataStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set theme
    #[inline]
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    /// Set owner details
    #[inline]
    #[must_use]
    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = owner;
        self
    }

    /// Set render budget
    #[inline]
    #[must_use]
    pub fn with_render_budget(mut self, budget: Duration) -> Self {
        self.render_budget = budget;
        self
    }
}

/// Composes pages from a content source
#[derive(Clone)]
pub struct PageComposer {
    source: Arc<dyn ContentSource>,
    settings: PageSettings,
}

impl PageComposer {
    /// Create composer over a content source
    pub fn new(source: Arc<dyn ContentSource>, settings: PageSettings) -> Self {
        Self { source, settings }
    }

    /// Presentation settings
    #[inline]
    #[must_use]
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Mount a page without waiting
    #[must_use]
    pub fn mount(&self) -> MountedPage {
        MountedPage::mount(
            Arc::clone(&self.source),
            self.settings.strategy,
            self.settings.policy,
        )
    }

    /// Mount a page and snapshot it once settled or out of budget
    ///
    /// The mount is dropped on return, so fetches that missed the budget
    /// are discarded when they complete.
    pub async fn snapshot(&self) -> PageSnapshot {
        let page = self.mount();
        page.settle(self.settings.render_budget).await;
        page.snapshot()
    }

    /// Render a full page for one request
    pub async fn render(&self, query: &PageQuery, submission: Option<&Submission>) -> String {
        let snapshot = self.snapshot().await;
        self.render_snapshot(&snapshot, query, submission)
    }

    /// Render a full page from an existing snapshot
    #[must_use]
    pub fn render_snapshot(
        &self,
        snapshot: &PageSnapshot,
        query: &PageQuery,
        submission: Option<&Submission>,
    ) -> String {
        let mut main = String::new();
        if let Some(html) = self.section(&snapshot.hero, query, submission) {
            main.push_str(&html);
        }

        if snapshot.gate_pending {
            main.push_str(&gate_placeholder());
        } else {
            for view in &snapshot.sections {
                if let Some(html) = self.section(view, query, submission) {
                    main.push_str(&html);
                    main.push('\n');
                }
            }
        }

        let nav: Vec<_> = snapshot
            .sections
            .iter()
            .filter(|v| v.visibility.is_visible())
            .map(|v| (v.section, self.ordinal(v)))
            .collect();

        Shell {
            theme: &self.settings.theme,
            owner: &self.settings.owner,
            nav: &nav,
            social: snapshot.social.as_deref(),
        }
        .document(&main)
    }

    fn ordinal(&self, view: &SectionView) -> Option<String> {
        view.ordinal.map(|n| self.settings.format.format(n))
    }

    /// One section's fragment; `None` when hidden
    fn section(
        &self,
        view: &SectionView,
        query: &PageQuery,
        submission: Option<&Submission>,
    ) -> Option<String> {
        match view.visibility {
            Visibility::Loading => return Some(render::loading(view.section)),
            Visibility::Hidden => {
                debug!(section = %view.section, "section hidden");
                return None;
            }
            Visibility::Visible => {}
        }

        let ordinal = self.ordinal(view);
        let ordinal = ordinal.as_deref();

        let html = match (view.section, view.content()) {
            (SectionId::Hero, Some(SectionContent::Hero(hero))) => render::hero::render(hero),
            (SectionId::About, Some(SectionContent::About(about))) => {
                render::about::render(about, ordinal)
            }
            (SectionId::Experience, Some(SectionContent::Experience(experience))) => {
                let tabs = TabSelection::experience(experience, query.experience.as_deref());
                render::experience::render(experience, ordinal, &tabs, query)
            }
            (SectionId::Skills, Some(SectionContent::Skills(skills))) => {
                let tabs = TabSelection::skills(skills, query.skills.as_deref());
                render::skills::render(skills, ordinal, &tabs, query)
            }
            (SectionId::Projects, Some(SectionContent::Projects(projects))) => {
                let gallery = GalleryView::new(projects, query.reveal(), query.project.as_deref());
                render::projects::render(&gallery, ordinal, query)
            }
            (SectionId::Testimonials, Some(SectionContent::Testimonials(testimonials))) => {
                render::testimonials::render(testimonials, ordinal)
            }
            (SectionId::Contact, _) => {
                let meta = view.meta()?;
                let mut contact = ContactView::from_meta(meta).with_open(query.contact_open());
                if let Some(submission) = submission {
                    contact = contact.with_submission(submission.form.clone(), submission.status);
                }
                render::contact::render(&contact, ordinal, query)
            }
            (section, _) => {
                debug!(%section, "content does not match section, hiding");
                return None;
            }
        };
        Some(html)
    }
}

impl fmt::Debug for PageComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageComposer")
            .field("source", &self.source)
            .field("settings", &self.settings)
            .finish()
    }
}
