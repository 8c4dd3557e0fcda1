use super::{escape, heading, open, CLOSE};
use crate::gallery::GalleryView;
use crate::links::UiLinks;
use folio_content::{Project, SectionId};

/// Section heading
pub const TITLE: &str = "Projects";

/// Render the gallery, its toggle and the selected project's overlay
#[must_use]
pub fn render(view: &GalleryView<'_>, ordinal: Option<&str>, links: &dyn UiLinks) -> String {
    let mut html = open(SectionId::Projects);
    html.push_str(&heading(ordinal, TITLE));
    html.push_str(r#"<div class="project-grid">"#);
    for (key, project) in &view.shown {
        html.push_str(&card(key, project, links));
    }
    html.push_str("</div>");

    if let Some(label) = view.toggle {
        html.push_str(&format!(
            r#"<div class="project-toggle"><a class="button" href="{}">{label}</a></div>"#,
            escape(&links.projects_reveal(view.mode.toggled())),
        ));
    }

    if let Some((_, project)) = &view.selected {
        html.push_str(&overlay(project, links));
    }

    html.push_str(CLOSE);
    html
}

fn card(key: &str, project: &Project, links: &dyn UiLinks) -> String {
    let mut html = format!(
        r#"<article class="project-card"><a href="{}">"#,
        escape(&links.project(Some(key)))
    );
    if !project.image_url.trim().is_empty() {
        html.push_str(&format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape(project.image_url.trim()),
            escape(&project.title)
        ));
    }
    html.push_str(&format!(
        r#"<h3>{}</h3><p>{}</p></a></article>"#,
        escape(project.title.trim()),
        escape(project.short_description.trim())
    ));
    html
}

fn overlay(project: &Project, links: &dyn UiLinks) -> String {
    let close = escape(&links.project(None));
    let mut html = format!(
        r#"<div class="project-overlay" role="dialog" aria-modal="true"><a class="overlay-backdrop" href="{close}" aria-label="Close"></a><div class="overlay-panel"><a class="overlay-close" href="{close}" aria-label="Close">&times;</a>"#
    );
    if !project.image_url.trim().is_empty() {
        html.push_str(&format!(
            r#"<img src="{}" alt="{}">"#,
            escape(project.image_url.trim()),
            escape(&project.title)
        ));
    }
    html.push_str(&format!(
        r#"<h3>{}</h3><p class="project-description">{}</p>"#,
        escape(project.title.trim()),
        escape(project.description.trim())
    ));

    let skills: Vec<&str> = project.skills().collect();
    if !skills.is_empty() {
        html.push_str(r#"<ul class="skill-tags">"#);
        for skill in skills {
            html.push_str(&format!("<li>{}</li>", escape(skill.trim())));
        }
        html.push_str("</ul>");
    }

    if let Some(url) = project.live_url() {
        html.push_str(&format!(
            r#"<a class="button" href="{}" target="_blank" rel="noopener noreferrer">Live Preview</a>"#,
            escape(url)
        ));
    }
    html.push_str("</div></div>");
    html
}
