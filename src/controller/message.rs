//! # Controller Messages
//!
//! This module defines the events a [`ControllerHandle`](super::ControllerHandle)
//! sends to the [`ProjectListController`](super::ProjectListController), and the
//! completions spawned network work sends back.

use super::error::ControllerError;
use super::state::{ListView, Operation};
use crate::model::{Project, ProjectDraft, ProjectId};
use resource_client::ApiError;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by the controller.
pub type Reply<T> = oneshot::Sender<Result<T, ControllerError>>;

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent.
    Declined,
    /// The project is gone. `redirected` is set when the user was looking at it.
    Removed { redirected: bool },
}

/// User-driven events, one variant per page operation.
///
/// - **Initialize**: first fetch of the collection.
/// - **RequestCreate / RequestEdit / CancelForm**: form transitions.
/// - **RequestDelete**: confirm, then delete.
/// - **SubmitForm**: save, then resynchronize.
/// - **Snapshot**: read-only copy of the state for rendering.
#[derive(Debug)]
pub enum ControllerRequest {
    Initialize {
        respond_to: Reply<usize>,
    },
    RequestCreate {
        respond_to: Reply<()>,
    },
    RequestEdit {
        project: Project,
        respond_to: Reply<()>,
    },
    RequestDelete {
        id: ProjectId,
        respond_to: Reply<DeleteOutcome>,
    },
    SubmitForm {
        draft: ProjectDraft,
        existing: Option<Project>,
        respond_to: Reply<()>,
    },
    CancelForm {
        respond_to: Reply<()>,
    },
    Snapshot {
        respond_to: oneshot::Sender<ListView>,
    },
}

/// Finished network work, applied to state by the controller task.
#[derive(Debug)]
pub(crate) enum Completion {
    Loaded {
        result: Result<Vec<Project>, ApiError>,
        respond_to: Reply<usize>,
    },
    Saved {
        result: Result<(), ApiError>,
        refreshed: Option<Result<Vec<Project>, ApiError>>,
        respond_to: Reply<()>,
    },
    Deleted {
        id: ProjectId,
        result: Result<(), ApiError>,
        respond_to: Reply<DeleteOutcome>,
    },
    Declined {
        id: ProjectId,
        respond_to: Reply<DeleteOutcome>,
    },
    /// The task doing `operation` panicked; its reply channel is already gone.
    Aborted {
        operation: Operation,
        reason: String,
    },
}
