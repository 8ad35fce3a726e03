//! # Projects List Controller
//!
//! This module owns the state of the projects page: the cached collection, the
//! form, and whatever network operation is pending.
//!
//! ## Structure
//!
//! - [`actor`] - [`ProjectListController`], the task that owns the state
//! - [`handle`] - [`ControllerHandle`], the cloneable API used by callers
//! - [`message`] - [`ControllerRequest`] events and [`DeleteOutcome`]
//! - [`state`] - [`FormState`], [`Operation`] and the rendered [`ListView`]
//! - [`error`] - [`ControllerError`]
//!
//! ## Resynchronization
//!
//! A successful create or update is followed by a fresh listing that replaces
//! the cache wholesale; no local merge is attempted. A successful delete only
//! evicts the id locally.
//!
//! ## Usage
//!
//! ```rust
//! use projects_page::clients::ProjectClient;
//! use projects_page::controller::{ControllerContext, FormState, ProjectListController};
//! use projects_page::interaction::{FixedAnswer, MemoryNavigator};
//! use projects_page::model::ProjectDraft;
//! use resource_client::mock::MockTransport;
//! use resource_client::Method;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect(Method::Get, "/api/projects").return_body(200, "[]");
//!     mock.expect(Method::Post, "/api/projects").return_status(201);
//!     mock.expect(Method::Get, "/api/projects")
//!         .return_body(200, r#"[{"id": 1, "title": "Blog"}]"#);
//!
//!     let (controller, handle) = ProjectListController::new(8);
//!     tokio::spawn(controller.run(ControllerContext {
//!         client: ProjectClient::from_transport(Arc::new(mock.clone())),
//!         confirm: Arc::new(FixedAnswer(true)),
//!         navigator: Arc::new(MemoryNavigator::default()),
//!     }));
//!
//!     handle.initialize().await.unwrap();
//!     handle.request_create().await.unwrap();
//!     handle.submit_form(ProjectDraft::new("Blog", ""), None).await.unwrap();
//!
//!     let view = handle.snapshot().await.unwrap();
//!     assert_eq!(view.projects.len(), 1);
//!     assert_eq!(view.form, FormState::Closed);
//! }
//! ```

pub mod actor;
pub mod error;
pub mod handle;
pub mod message;
pub mod state;

pub use actor::*;
pub use error::*;
pub use handle::*;
pub use message::*;
pub use state::*;
