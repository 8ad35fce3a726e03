//! # Projects Page
//!
//! A portfolio "projects" page backed by a remote `/api/projects` collection:
//! list it, create, edit and delete entries, and render the collection as HTML
//! with featured projects shown first.
//!
//! ## Architecture Notes
//!
//! ### 1. One owner for page state
//! [`ProjectListController`](controller::ProjectListController) runs in its own Tokio
//! task and owns the cached collection, the form state and the in-flight operation.
//! Callers talk to it through a cloneable [`ControllerHandle`](controller::ControllerHandle).
//!
//! ### 2. Late-bound collaborators
//! The HTTP client, the delete confirmation and the router are injected when the
//! controller starts running, so tests swap in
//! [`MockTransport`](resource_client::mock::MockTransport),
//! [`FixedAnswer`](interaction::FixedAnswer) and
//! [`MemoryNavigator`](interaction::MemoryNavigator).
//!
//! ### 3. Pure rendering
//! [`render::render_page`] turns a [`ListView`](controller::ListView) snapshot into
//! markup. It never touches the network.
//!
//! ## Module Tour
//!
//! - [`model`] - [`Project`](model::Project), [`ProjectId`](model::ProjectId), [`ProjectDraft`](model::ProjectDraft)
//! - [`clients`] - [`ProjectClient`](clients::ProjectClient), the typed API client
//! - [`controller`] - the list state controller
//! - [`render`] - partitioning and HTML
//! - [`interaction`] - confirmation prompt and navigation
//! - [`lifecycle`] - [`ProjectsPage`](lifecycle::ProjectsPage) wiring and tracing setup
//! - [`config`] - TOML configuration
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --api-url http://localhost:3000 render
//! ```

pub mod clients;
pub mod config;
pub mod controller;
pub mod interaction;
pub mod lifecycle;
pub mod model;
pub mod render;
