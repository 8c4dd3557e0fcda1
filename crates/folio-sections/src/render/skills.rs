use super::{escape, heading, open, CLOSE};
use crate::links::UiLinks;
use crate::tabs::TabSelection;
use folio_content::{SectionId, SkillsContent};

/// Section heading
pub const TITLE: &str = "Skills";

/// Render skill category tabs and the active category's skills
#[must_use]
pub fn render(
    skills: &SkillsContent,
    ordinal: Option<&str>,
    tabs: &TabSelection,
    links: &dyn UiLinks,
) -> String {
    let mut html = open(SectionId::Skills);
    html.push_str(&heading(ordinal, TITLE));
    html.push_str(r#"<div class="tabs"><nav class="tab-list" role="tablist">"#);
    for name in tabs.tabs() {
        let class = if tabs.is_active(name) { "tab active" } else { "tab" };
        html.push_str(&format!(
            r#"<a class="{class}" role="tab" href="{href}">{label}</a>"#,
            href = escape(&links.skills_tab(name)),
            label = escape(name),
        ));
    }
    html.push_str("</nav>");

    if let Some(category) = tabs.active().and_then(|name| skills.category(name)) {
        html.push_str(r#"<ul class="skill-list" role="tabpanel">"#);
        for skill in category.skills() {
            html.push_str(&format!("<li>{}</li>", escape(skill.trim())));
        }
        html.push_str("</ul>");
    }

    html.push_str("</div>");
    html.push_str(CLOSE);
    html
}
