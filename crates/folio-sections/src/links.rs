//! Links that change per-section UI state
//!
//! Renderers never build URLs themselves. Every interaction (switching a tab,
//! revealing more projects, opening the contact form) is a link produced by
//! the page, which owns the request's state.

use crate::gallery::RevealMode;

/// Produces hrefs for UI state transitions
pub trait UiLinks {
    /// Link that activates an experience tab
    fn experience_tab(&self, key: &str) -> String;

    /// Link that activates a skills category
    fn skills_tab(&self, category: &str) -> String;

    /// Link that switches the projects gallery to `mode`
    fn projects_reveal(&self, mode: RevealMode) -> String;

    /// Link that opens a project's overlay, or closes it for `None`
    fn project(&self, key: Option<&str>) -> String;

    /// Link that reveals or hides the contact form
    fn contact_form(&self, open: bool) -> String;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{RevealMode, UiLinks};

    /// Links that spell out the transition, for assertions
    #[derive(Debug, Default)]
    pub(crate) struct SpelledLinks;

    impl UiLinks for SpelledLinks {
        fn experience_tab(&self, key: &str) -> String {
            format!("?experience={key}")
        }

        fn skills_tab(&self, category: &str) -> String {
            format!("?skills={category}")
        }

        fn projects_reveal(&self, mode: RevealMode) -> String {
            match mode {
                RevealMode::Collapsed => "?".to_string(),
                RevealMode::Expanded => "?projects=all".to_string(),
            }
        }

        fn project(&self, key: Option<&str>) -> String {
            key.map_or_else(|| "?".to_string(), |k| format!("?project={k}"))
        }

        fn contact_form(&self, open: bool) -> String {
            String::from(if open { "?contact=open" } else { "?" })
        }
    }
}
