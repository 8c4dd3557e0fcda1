use super::{escape, heading, open, CLOSE};
use crate::links::UiLinks;
use crate::tabs::TabSelection;
use folio_content::{ExperienceContent, SectionId};

/// Section heading
pub const TITLE: &str = "Where I've Worked";

/// Render the experience tabs and the active entry
#[must_use]
pub fn render(
    experience: &ExperienceContent,
    ordinal: Option<&str>,
    tabs: &TabSelection,
    links: &dyn UiLinks,
) -> String {
    let mut html = open(SectionId::Experience);
    html.push_str(&heading(ordinal, TITLE));
    html.push_str(r#"<div class="tabs"><nav class="tab-list" role="tablist">"#);

    for key in tabs.tabs() {
        let Some(entry) = experience.entry(key) else {
            continue;
        };
        let class = if tabs.is_active(key) { "tab active" } else { "tab" };
        html.push_str(&format!(
            r#"<a class="{class}" role="tab" href="{href}">{label}</a>"#,
            href = escape(&links.experience_tab(key)),
            label = escape(entry.label()),
        ));
    }
    html.push_str("</nav>");

    if let Some(entry) = tabs.active().and_then(|key| experience.entry(key)) {
        html.push_str(r#"<div class="tab-panel" role="tabpanel"><h3>"#);
        html.push_str(&escape(entry.title.trim()));
        if !entry.context.trim().is_empty() {
            html.push_str(&format!(
                r#" <span class="experience-context">@ {}</span>"#,
                escape(entry.context.trim())
            ));
        }
        html.push_str("</h3>");
        if !entry.date.trim().is_empty() {
            html.push_str(&format!(
                r#"<p class="experience-date">{}</p>"#,
                escape(entry.date.trim())
            ));
        }
        let points: Vec<&str> = entry.points().collect();
        if !points.is_empty() {
            html.push_str("<ul>");
            for point in points {
                html.push_str(&format!("<li>{}</li>", escape(point.trim())));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html.push_str(CLOSE);
    html
}
