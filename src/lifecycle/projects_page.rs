use crate::clients::ProjectClient;
use crate::config::Config;
use crate::controller::{ControllerContext, ControllerError, ControllerHandle, ProjectListController};
use crate::interaction::{Confirm, Navigator};
use crate::render::render_page;
use resource_client::ReqwestTransport;
use std::sync::Arc;
use tracing::{error, info};

/// A running projects page: the controller task plus the handle to drive it.
pub struct ProjectsPage {
    /// Handle for page operations (create, edit, delete, submit...).
    pub controller: ControllerHandle,

    handle: tokio::task::JoinHandle<()>,
}

impl ProjectsPage {
    /// Starts the page against the configured API origin.
    pub fn from_config(config: &Config, confirm: Arc<dyn Confirm>, navigator: Arc<dyn Navigator>) -> Self {
        let transport = ReqwestTransport::new(config.api_base_url.clone());
        let client = ProjectClient::from_transport(Arc::new(transport));
        Self::start(client, config.channel_capacity, confirm, navigator)
    }

    /// Starts the page with an already-built client.
    pub fn start(
        client: ProjectClient,
        channel_capacity: usize,
        confirm: Arc<dyn Confirm>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (controller, handle) = ProjectListController::new(channel_capacity);
        let context = ControllerContext {
            client,
            confirm,
            navigator,
        };
        let task = tokio::spawn(controller.run(context));

        Self {
            controller: handle,
            handle: task,
        }
    }

    /// Loads the collection. Only the first activation fetches.
    pub async fn activate(&self) -> Result<usize, ControllerError> {
        info!("Activating projects page");
        self.controller.initialize().await
    }

    /// Renders the page as it is right now.
    pub async fn render(&self) -> Result<String, ControllerError> {
        let view = self.controller.snapshot().await?;
        Ok(render_page(&view))
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down projects page...");

        // Dropping the handle closes the controller's mailbox.
        drop(self.controller);

        if let Err(e) = self.handle.await {
            error!("Controller task failed: {:?}", e);
            return Err(format!("Controller task failed: {:?}", e));
        }

        info!("Projects page shutdown complete.");
        Ok(())
    }
}
