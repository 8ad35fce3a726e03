//! # Presentation
//!
//! Pure functions from a [`ListView`] to HTML. Nothing here talks to the network
//! or mutates state; the same view always renders the same markup.
//!
//! - [`partition`] splits the collection by `featured`.
//! - [`layout`] renders feature blocks and grid cards.
//! - [`html`] escapes and truncates text.

pub mod html;
pub mod layout;
pub mod partition;

pub use layout::{featured_block, project_card, Motion, MAX_TAGS};
pub use partition::{partition, Partition};

use crate::controller::{FormState, ListView};
use html::escape;
use std::fmt::Write;

/// Renders the whole projects page.
pub fn render_page(view: &ListView) -> String {
    let groups = partition(&view.projects);
    let busy = view.is_busy();
    let disabled = if busy { " disabled" } else { "" };

    let mut out = String::new();
    out.push_str(r#"<main class="projects-page""#);
    if let Some(op) = &view.in_flight {
        let _ = write!(out, r#" aria-busy="true" data-operation="{}""#, escape(&op.to_string()));
    }
    out.push('>');
    out.push_str(r#"<h1 class="glitch-title">Projects</h1>"#);
    let _ = write!(
        out,
        r#"<div class="create-row"><button type="button" data-action="create"{disabled}>Create Project</button></div>"#,
    );
    out.push_str(&form_mount(&view.form));

    out.push_str(r#"<section class="featured-projects">"#);
    for (index, project) in groups.featured.iter().enumerate() {
        out.push_str(&featured_block(index, project));
    }
    out.push_str("</section>");

    out.push_str(r#"<section class="project-grid">"#);
    for (index, project) in groups.standard.iter().enumerate() {
        out.push_str(&project_card(index, project, busy));
    }
    out.push_str("</section></main>");
    out
}

/// Mount point for the external project form.
fn form_mount(form: &FormState) -> String {
    match form {
        FormState::Closed => r#"<div id="project-form" data-open="false"></div>"#.to_string(),
        FormState::CreatingNew => {
            r#"<div id="project-form" data-open="true" data-mode="create"></div>"#.to_string()
        }
        FormState::Editing(project) => format!(
            r#"<div id="project-form" data-open="true" data-mode="edit" data-project-id="{}"></div>"#,
            escape(project.id.as_str())
        ),
    }
}
