//! # List Controller Task
//!
//! This module defines the [`ProjectListController`], the single owner of the
//! projects page state. It processes events sequentially, so the collection,
//! the form and the in-flight operation never need a lock.

use super::error::ControllerError;
use super::handle::ControllerHandle;
use super::message::{Completion, ControllerRequest, DeleteOutcome};
use super::state::{FormState, ListState, Operation};
use crate::clients::ProjectClient;
use crate::interaction::{project_detail_path, Confirm, Navigator, DELETE_PROMPT, PROJECTS_ROOT};
use resource_client::ApiClient;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Dependencies injected when the controller starts running.
#[derive(Clone)]
pub struct ControllerContext {
    pub client: ProjectClient,
    pub confirm: Arc<dyn Confirm>,
    pub navigator: Arc<dyn Navigator>,
}

/// The task that owns the projects page state.
///
/// # Architecture Note
/// Network calls and the delete prompt are never awaited inside the event
/// loop. Each one runs in a spawned task and reports back as a [`Completion`],
/// while `in_flight` records what is pending. Snapshots keep answering during a
/// slow save or an open prompt, and a second submit or delete is refused with
/// [`ControllerError::Busy`] instead of racing the first. A task that panics
/// still reports back, as [`Completion::Aborted`].
///
/// # Usage Pattern
///
/// ```rust,ignore
/// let (controller, handle) = ProjectListController::new(32);
/// tokio::spawn(controller.run(context));
/// handle.initialize().await?;
/// ```
pub struct ProjectListController {
    receiver: mpsc::Receiver<ControllerRequest>,
    completions: mpsc::UnboundedReceiver<Completion>,
    completion_sender: mpsc::UnboundedSender<Completion>,
    state: ListState,
}

impl ProjectListController {
    pub fn new(buffer_size: usize) -> (Self, ControllerHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let controller = Self {
            receiver,
            completions,
            completion_sender,
            state: ListState::default(),
        };
        (controller, ControllerHandle::new(sender))
    }

    pub async fn run(mut self, context: ControllerContext) {
        info!("Controller started");

        loop {
            tokio::select! {
                Some(done) = self.completions.recv() => self.complete(done, &context),
                request = self.receiver.recv() => match request {
                    Some(request) => self.handle(request, &context),
                    None => break,
                },
            }
        }

        // Every handle is gone; let pending work land before exiting. Only the
        // spawned tasks hold completion senders from here on.
        let (detached, _) = mpsc::unbounded_channel();
        drop(std::mem::replace(&mut self.completion_sender, detached));
        while self.state.in_flight.is_some() {
            match self.completions.recv().await {
                Some(done) => self.complete(done, &context),
                None => break,
            }
        }

        info!(size = self.state.projects.len(), "Shutdown");
    }

    fn handle(&mut self, request: ControllerRequest, ctx: &ControllerContext) {
        match request {
            ControllerRequest::Initialize { respond_to } => {
                if let Some(op) = &self.state.in_flight {
                    let _ = respond_to.send(Err(ControllerError::Busy(op.clone())));
                    return;
                }
                if self.state.initialized {
                    debug!("Already initialized");
                    let _ = respond_to.send(Ok(self.state.projects.len()));
                    return;
                }
                self.state.initialized = true;
                self.state.in_flight = Some(Operation::Loading);
                debug!("Initialize");

                let client = ctx.client.clone();
                self.spawn_work(Operation::Loading, async move {
                    let result = client.list().await;
                    Completion::Loaded { result, respond_to }
                });
            }
            ControllerRequest::RequestCreate { respond_to } => {
                let result = self.transition_form(FormState::CreatingNew);
                let _ = respond_to.send(result);
            }
            ControllerRequest::RequestEdit {
                project,
                respond_to,
            } => {
                let result = self.transition_form(FormState::Editing(project));
                let _ = respond_to.send(result);
            }
            ControllerRequest::CancelForm { respond_to } => {
                let result = self.transition_form(FormState::Closed);
                let _ = respond_to.send(result);
            }
            ControllerRequest::RequestDelete { id, respond_to } => {
                if let Some(op) = &self.state.in_flight {
                    warn!(%id, operation = %op, "Delete refused while busy");
                    let _ = respond_to.send(Err(ControllerError::Busy(op.clone())));
                    return;
                }
                let operation = Operation::Deleting(id.clone());
                self.state.in_flight = Some(operation.clone());
                debug!(%id, "Delete");

                let client = ctx.client.clone();
                let confirm = ctx.confirm.clone();
                self.spawn_work(operation, async move {
                    if !confirm.confirm(DELETE_PROMPT).await {
                        return Completion::Declined { id, respond_to };
                    }
                    let result = client.delete(&id).await;
                    Completion::Deleted {
                        id,
                        result,
                        respond_to,
                    }
                });
            }
            ControllerRequest::SubmitForm {
                draft,
                existing,
                respond_to,
            } => {
                if let Some(op) = &self.state.in_flight {
                    warn!(operation = %op, "Submit refused while busy");
                    let _ = respond_to.send(Err(ControllerError::Busy(op.clone())));
                    return;
                }
                if !self.state.form.is_open() {
                    let _ = respond_to.send(Err(ControllerError::FormClosed));
                    return;
                }
                self.state.in_flight = Some(Operation::Saving);
                debug!(editing = existing.is_some(), "Submit");

                let client = ctx.client.clone();
                self.spawn_work(Operation::Saving, async move {
                    let result = client.save(&draft, existing.as_ref()).await;
                    let refreshed = match result {
                        Ok(()) => Some(client.list().await),
                        Err(_) => None,
                    };
                    Completion::Saved {
                        result,
                        refreshed,
                        respond_to,
                    }
                });
            }
            ControllerRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.state.view());
            }
        }
    }

    fn complete(&mut self, done: Completion, ctx: &ControllerContext) {
        self.state.in_flight = None;

        match done {
            Completion::Loaded { result, respond_to } => match result {
                Ok(projects) => {
                    self.state.replace_projects(projects);
                    info!(count = self.state.projects.len(), "Loaded");
                    let _ = respond_to.send(Ok(self.state.projects.len()));
                }
                Err(e) => {
                    error!(error = %e, "Failed to fetch projects");
                    let _ = respond_to.send(Err(e.into()));
                }
            },
            Completion::Saved {
                result,
                refreshed,
                respond_to,
            } => match result {
                Ok(()) => {
                    match refreshed {
                        Some(Ok(projects)) => self.state.replace_projects(projects),
                        Some(Err(e)) => error!(error = %e, "Failed to refresh projects after save"),
                        None => {}
                    }
                    self.state.form = FormState::Closed;
                    info!(count = self.state.projects.len(), "Saved");
                    let _ = respond_to.send(Ok(()));
                }
                Err(e) => {
                    error!(error = %e, "Error submitting form");
                    let _ = respond_to.send(Err(e.into()));
                }
            },
            Completion::Deleted {
                id,
                result,
                respond_to,
            } => match result {
                Ok(()) => {
                    self.state.remove_project(&id);
                    let redirected = ctx.navigator.current_path() == project_detail_path(&id);
                    if redirected {
                        ctx.navigator.push(PROJECTS_ROOT);
                    }
                    info!(%id, redirected, size = self.state.projects.len(), "Deleted");
                    let _ = respond_to.send(Ok(DeleteOutcome::Removed { redirected }));
                }
                Err(e) => {
                    error!(%id, error = %e, "Failed to delete project");
                    let _ = respond_to.send(Err(e.into()));
                }
            },
            Completion::Declined { id, respond_to } => {
                info!(%id, "Delete declined");
                let _ = respond_to.send(Ok(DeleteOutcome::Declined));
            }
            Completion::Aborted { operation, reason } => {
                error!(%operation, %reason, "Operation aborted");
            }
        }
    }

    /// Runs `work` off the event loop. Its completion, or an
    /// [`Completion::Aborted`] if it panics, comes back on the completion channel.
    fn spawn_work<F>(&self, operation: Operation, work: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        let done = self.completion_sender.clone();
        tokio::spawn(async move {
            let completion = match tokio::spawn(work).await {
                Ok(completion) => completion,
                Err(e) => Completion::Aborted {
                    operation,
                    reason: e.to_string(),
                },
            };
            let _ = done.send(completion);
        });
    }

    fn transition_form(&mut self, next: FormState) -> Result<(), ControllerError> {
        if self.state.in_flight == Some(Operation::Saving) {
            return Err(ControllerError::Busy(Operation::Saving));
        }
        debug!(open = next.is_open(), "Form");
        self.state.form = next;
        Ok(())
    }
}
