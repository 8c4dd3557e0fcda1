//! Projects gallery state: reveal mode and selected project

use folio_content::{Project, ProjectsContent};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Projects shown while collapsed
pub const COLLAPSED_COUNT: usize = 3;

/// How much of the gallery is revealed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// First [`COLLAPSED_COUNT`] projects
    #[default]
    Collapsed,
    /// Every project
    Expanded,
}

impl RevealMode {
    /// The other mode
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// Label of the control that leaves this mode
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Collapsed => "View More",
            Self::Expanded => "Show Less",
        }
    }
}

impl FromStr for RevealMode {
    type Err = std::convert::Infallible;

    /// `all` and `expanded` expand; anything else collapses
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "all" | "expanded" => Self::Expanded,
            _ => Self::Collapsed,
        })
    }
}

/// Selection key of a project: its id, or its position when the id is blank
#[must_use]
pub fn project_key(index: usize, project: &Project) -> String {
    match project.id.trim() {
        "" => format!("project-{index}"),
        id => id.to_string(),
    }
}

/// What the gallery shows for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView<'a> {
    /// Cards to render, with their selection keys
    pub shown: Vec<(String, &'a Project)>,
    /// Toggle control label, when there is more than one page of cards
    pub toggle: Option<&'static str>,
    /// Current reveal mode
    pub mode: RevealMode,
    /// Project open in the overlay
    pub selected: Option<(String, &'a Project)>,
}

impl<'a> GalleryView<'a> {
    /// Derive the view from content, mode and requested selection
    ///
    /// Every list entry is a card, so the toggle follows the list length.
    /// An unknown selection resolves to none.
    #[must_use]
    pub fn new(content: &'a ProjectsContent, mode: RevealMode, selected: Option<&str>) -> Self {
        let cards: Vec<(String, &Project)> = content
            .list
            .iter()
            .enumerate()
            .map(|(i, p)| (project_key(i, p), p))
            .collect();

        let selected = selected.and_then(|key| cards.iter().find(|(k, _)| k == key).cloned());
        let toggle = (cards.len() > COLLAPSED_COUNT).then(|| mode.toggle_label());

        let shown = match mode {
            RevealMode::Collapsed => cards.into_iter().take(COLLAPSED_COUNT).collect(),
            RevealMode::Expanded => cards,
        };

        Self {
            shown,
            toggle,
            mode,
            selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects(n: usize) -> ProjectsContent {
        ProjectsContent::from(
            (0..n)
                .map(|i| Project {
                    id: format!("p{i}"),
                    title: format!("Project {i}"),
                    ..Project::default()
                })
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn five_projects_collapsed() {
        let content = projects(5);
        let view = GalleryView::new(&content, RevealMode::Collapsed, None);
        assert_eq!(view.shown.len(), 3);
        assert_eq!(view.toggle, Some("View More"));
    }

    #[test]
    fn five_projects_expanded() {
        let content = projects(5);
        let view = GalleryView::new(&content, RevealMode::Expanded, None);
        assert_eq!(view.shown.len(), 5);
        assert_eq!(view.toggle, Some("Show Less"));
    }

    #[test]
    fn three_projects_have_no_toggle() {
        let content = projects(3);
        let view = GalleryView::new(&content, RevealMode::Collapsed, None);
        assert_eq!(view.shown.len(), 3);
        assert_eq!(view.toggle, None);
    }

    #[test]
    fn selection_by_id_and_position() {
        let mut content = projects(2);
        content.list[1].id = String::new();

        let view = GalleryView::new(&content, RevealMode::Collapsed, Some("p0"));
        assert_eq!(view.selected.map(|(_, p)| p.title.as_str()), Some("Project 0"));

        let view = GalleryView::new(&content, RevealMode::Collapsed, Some("project-1"));
        assert_eq!(view.selected.map(|(_, p)| p.title.as_str()), Some("Project 1"));

        let view = GalleryView::new(&content, RevealMode::Collapsed, Some("nope"));
        assert!(view.selected.is_none());
    }

    #[test]
    fn hidden_cards_can_still_be_selected() {
        let content = projects(5);
        let view = GalleryView::new(&content, RevealMode::Collapsed, Some("p4"));
        assert!(view.selected.is_some());
    }

    #[test]
    fn description_only_project_counts_toward_toggle() {
        let mut content = projects(3);
        content.list.push(Project {
            id: "p3".into(),
            description: "Only a long description".into(),
            ..Project::default()
        });

        let view = GalleryView::new(&content, RevealMode::Collapsed, None);
        assert_eq!(view.shown.len(), 3);
        assert_eq!(view.toggle, Some("View More"));

        let view = GalleryView::new(&content, RevealMode::Expanded, None);
        assert_eq!(view.shown.len(), 4);
        assert_eq!(view.shown[3].0, "p3");
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("all".parse::<RevealMode>(), Ok(RevealMode::Expanded));
        assert_eq!("bogus".parse::<RevealMode>(), Ok(RevealMode::Collapsed));
        assert_eq!(RevealMode::Collapsed.toggled(), RevealMode::Expanded);
    }
}
