//! Error types for the list controller.

use super::state::Operation;
use resource_client::ApiError;
use thiserror::Error;

/// Errors that can occur while driving the projects list.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Another network operation has not finished yet.
    #[error("{0} already in progress")]
    Busy(Operation),

    /// A submit arrived while no form was open.
    #[error("Project form is not open")]
    FormClosed,

    /// The API call behind the operation failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The controller task is gone.
    #[error("Controller closed")]
    Closed,

    /// The controller dropped the reply channel.
    #[error("Controller dropped response channel")]
    Dropped,
}
