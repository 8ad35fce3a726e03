//! Markup for the two project layouts: full-width feature blocks and grid cards.

use super::html::{escape, truncate};
use crate::interaction::project_detail_path;
use crate::model::Project;
use std::fmt::Write;

/// Tags shown per project in list contexts.
pub const MAX_TAGS: usize = 3;

/// Character budgets for summary text.
pub const FEATURED_DESCRIPTION_CHARS: usize = 320;
pub const CARD_TITLE_CHARS: usize = 60;
pub const CARD_DESCRIPTION_CHARS: usize = 160;

/// Entrance animation for one item, derived from its index in its group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub offset_y_px: u32,
}

impl Motion {
    pub fn featured(index: usize) -> Self {
        Self {
            duration_secs: 0.7,
            delay_secs: index as f64 * 0.12,
            offset_y_px: 30,
        }
    }

    pub fn card(index: usize) -> Self {
        Self {
            duration_secs: 0.6,
            delay_secs: index as f64 * 0.08,
            offset_y_px: 24,
        }
    }

    fn style(&self) -> String {
        format!(
            "--enter-y: {}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.offset_y_px, self.duration_secs, self.delay_secs
        )
    }
}

struct Frame {
    width: u32,
    height: u32,
    class: &'static str,
}

const FEATURED_FRAME: Frame = Frame {
    width: 500,
    height: 300,
    class: "w-full h-72",
};

const CARD_FRAME: Frame = Frame {
    width: 300,
    height: 500,
    class: "w-full h-48",
};

/// A full-width feature block.
pub fn featured_block(index: usize, project: &Project) -> String {
    let href = escape(&project_detail_path(&project.id));
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<article class="featured-project enter-up" data-project-id="{id}" style="{style}">"#,
        id = escape(project.id.as_str()),
        style = Motion::featured(index).style(),
    );
    let _ = write!(
        out,
        r#"<a href="{href}" class="featured-media">{media}<div class="rgb-overlay" aria-hidden="true"></div></a>"#,
        media = media(project, &FEATURED_FRAME),
    );
    out.push_str(r#"<div class="featured-body">"#);
    let _ = write!(out, r#"<h2 class="featured-title">{}</h2>"#, escape(&project.title));
    let _ = write!(
        out,
        r#"<p class="featured-description line-clamp-3">{}</p>"#,
        escape(&truncate(&project.description, FEATURED_DESCRIPTION_CHARS)),
    );
    out.push_str(&tags(project));
    let _ = write!(out, r#"<a href="{href}" class="btn-ghost">View</a>"#);
    out.push_str("</div></article>");
    out
}

/// A grid card with View/Edit/Delete actions. Actions render disabled while `busy`.
pub fn project_card(index: usize, project: &Project, busy: bool) -> String {
    let id = escape(project.id.as_str());
    let href = escape(&project_detail_path(&project.id));
    let disabled = if busy { " disabled" } else { "" };
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div class="project-card enter-up" data-project-id="{id}" style="{style}">"#,
        style = Motion::card(index).style(),
    );
    let _ = write!(out, r#"<a href="{href}" class="card-link">{}"#, media(project, &CARD_FRAME));
    out.push_str(r#"<div class="card-body">"#);
    let _ = write!(
        out,
        r#"<h3 class="card-title">{}</h3>"#,
        escape(&truncate(&project.title, CARD_TITLE_CHARS)),
    );
    let _ = write!(
        out,
        r#"<p class="card-description line-clamp-2">{}</p>"#,
        escape(&truncate(&project.description, CARD_DESCRIPTION_CHARS)),
    );
    out.push_str(&tags(project));
    out.push_str(r#"<span class="btn-ghost">View</span></div></a>"#);
    let _ = write!(
        out,
        r#"<div class="card-actions"><button type="button" class="btn-edit" data-action="edit" data-project-id="{id}"{disabled}>Edit</button><button type="button" class="btn-delete" data-action="delete" data-project-id="{id}"{disabled}>Delete</button></div>"#,
    );
    out.push_str("</div>");
    out
}

fn media(project: &Project, frame: &Frame) -> String {
    match project.image() {
        Some(url) => format!(
            r#"<img src="{src}" alt="{alt}" width="{w}" height="{h}" class="{class} object-cover">"#,
            src = escape(url),
            alt = escape(&project.title),
            w = frame.width,
            h = frame.height,
            class = frame.class,
        ),
        None => format!(
            r#"<div class="{} image-placeholder">No Image</div>"#,
            frame.class
        ),
    }
}

fn tags(project: &Project) -> String {
    let mut out = String::from(r#"<div class="tags">"#);
    for technology in project.leading_technologies(MAX_TAGS) {
        let _ = write!(out, r#"<span class="tag-graffiti">{}</span>"#, escape(technology));
    }
    out.push_str("</div>");
    out
}
