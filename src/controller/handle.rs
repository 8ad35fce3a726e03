//! # Controller Handle
//!
//! The cloneable front door to a running [`ProjectListController`](super::ProjectListController).

use super::error::ControllerError;
use super::message::{ControllerRequest, DeleteOutcome, Reply};
use super::state::ListView;
use crate::model::{Project, ProjectDraft, ProjectId};
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

/// A type-safe handle for driving the projects list.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – every method resolves once the controller has applied the event.
/// * **Maps to the page** – one method per user action, plus [`snapshot`](Self::snapshot).
#[derive(Clone)]
pub struct ControllerHandle {
    sender: mpsc::Sender<ControllerRequest>,
}

impl ControllerHandle {
    pub(crate) fn new(sender: mpsc::Sender<ControllerRequest>) -> Self {
        Self { sender }
    }

    /// Loads the collection on first activation. Returns the number of projects.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<usize, ControllerError> {
        self.call(|respond_to| ControllerRequest::Initialize { respond_to })
            .await
    }

    /// Opens the form with no prefilled data.
    pub async fn request_create(&self) -> Result<(), ControllerError> {
        self.call(|respond_to| ControllerRequest::RequestCreate { respond_to })
            .await
    }

    /// Opens the form prefilled from `project`.
    pub async fn request_edit(&self, project: Project) -> Result<(), ControllerError> {
        self.call(|respond_to| ControllerRequest::RequestEdit {
            project,
            respond_to,
        })
        .await
    }

    /// Asks for confirmation, then deletes `id`.
    #[instrument(skip(self))]
    pub async fn request_delete(&self, id: ProjectId) -> Result<DeleteOutcome, ControllerError> {
        self.call(|respond_to| ControllerRequest::RequestDelete { id, respond_to })
            .await
    }

    /// Saves the form (update when `existing` is given, create otherwise),
    /// resynchronizes the collection and closes the form.
    #[instrument(skip(self, draft, existing))]
    pub async fn submit_form(
        &self,
        draft: ProjectDraft,
        existing: Option<Project>,
    ) -> Result<(), ControllerError> {
        self.call(|respond_to| ControllerRequest::SubmitForm {
            draft,
            existing,
            respond_to,
        })
        .await
    }

    /// Closes the form without side effects.
    pub async fn cancel_form(&self) -> Result<(), ControllerError> {
        self.call(|respond_to| ControllerRequest::CancelForm { respond_to })
            .await
    }

    /// Copies the current state for rendering.
    pub async fn snapshot(&self) -> Result<ListView, ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ControllerRequest::Snapshot { respond_to })
            .await
            .map_err(|_| ControllerError::Closed)?;
        response.await.map_err(|_| ControllerError::Dropped)
    }

    async fn call<T>(
        &self,
        request: impl FnOnce(Reply<T>) -> ControllerRequest,
    ) -> Result<T, ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| ControllerError::Closed)?;
        response.await.map_err(|_| ControllerError::Dropped)?
    }
}
