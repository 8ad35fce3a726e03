//! State owned by the list controller and the view handed to the renderer.

use crate::model::{Project, ProjectId};
use std::collections::HashSet;
use std::fmt::{self, Display};
use tracing::warn;

/// Whether the project form is shown, and for what.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    CreatingNew,
    Editing(Project),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    /// The project being edited, if any.
    pub fn target(&self) -> Option<&Project> {
        match self {
            FormState::Editing(project) => Some(project),
            _ => None,
        }
    }
}

/// A network operation the controller is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Loading,
    Saving,
    Deleting(ProjectId),
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Loading => f.write_str("Loading"),
            Operation::Saving => f.write_str("Saving"),
            Operation::Deleting(id) => write!(f, "Deleting {id}"),
        }
    }
}

/// Everything the renderer needs, copied out of the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    pub projects: Vec<Project>,
    pub form: FormState,
    pub in_flight: Option<Operation>,
}

impl ListView {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListState {
    pub(crate) projects: Vec<Project>,
    pub(crate) form: FormState,
    pub(crate) in_flight: Option<Operation>,
    pub(crate) initialized: bool,
}

impl ListState {
    /// Replaces the cached collection. Duplicate ids keep their first occurrence.
    pub(crate) fn replace_projects(&mut self, incoming: Vec<Project>) {
        let mut seen = HashSet::with_capacity(incoming.len());
        let mut projects = Vec::with_capacity(incoming.len());
        for project in incoming {
            if seen.insert(project.id.clone()) {
                projects.push(project);
            } else {
                warn!(id = %project.id, "Dropping duplicate project id");
            }
        }
        self.projects = projects;
    }

    /// Evicts the project with `id`. Returns whether anything was removed.
    pub(crate) fn remove_project(&mut self, id: &ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|project| &project.id != id);
        self.projects.len() != before
    }

    pub(crate) fn view(&self) -> ListView {
        ListView {
            projects: self.projects.clone(),
            form: self.form.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str) -> Project {
        Project::new(id, title, "")
    }

    #[test]
    fn test_replace_keeps_first_duplicate() {
        let mut state = ListState::default();
        state.replace_projects(vec![project("1", "A"), project("2", "B"), project("1", "A again")]);

        let titles: Vec<_> = state.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_remove_only_matching_id() {
        let mut state = ListState::default();
        state.replace_projects(vec![project("1", "A"), project("2", "B"), project("3", "C")]);

        assert!(state.remove_project(&ProjectId::from("2")));
        assert!(!state.remove_project(&ProjectId::from("9")));

        let ids: Vec<_> = state.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_form_state_target() {
        assert!(!FormState::Closed.is_open());
        assert!(FormState::CreatingNew.is_open());
        assert!(FormState::CreatingNew.target().is_none());

        let editing = FormState::Editing(project("5", "E"));
        assert_eq!(editing.target().map(|p| p.id.as_str()), Some("5"));
    }
}
