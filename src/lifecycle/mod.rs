//! # Page Lifecycle & Orchestration
//!
//! This module starts, wires and stops the projects page.
//!
//! ## The ProjectsPage Pattern
//!
//! The [`ProjectsPage`] is the orchestrator:
//!
//! 1. **Transport** - build a [`ReqwestTransport`](resource_client::ReqwestTransport) for the configured origin
//! 2. **Client** - wrap it in a [`ProjectClient`](crate::clients::ProjectClient)
//! 3. **Controller** - create the list controller and spawn it with its context
//!    (client, confirmation prompt, router) injected at run time
//! 4. **Activation** - load the collection once
//! 5. **Shutdown** - drop the handle and wait for the controller task
//!
//! ```rust,ignore
//! let page = ProjectsPage::from_config(&config, confirm, navigator);
//! page.activate().await?;
//! println!("{}", page.render().await?);
//! page.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! Dropping the last [`ControllerHandle`](crate::controller::ControllerHandle)
//! closes the controller's mailbox. The controller lets a pending network
//! operation finish, logs its final size, and exits.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`] module.

pub mod projects_page;
pub mod tracing;

pub use projects_page::*;
pub use tracing::*;
