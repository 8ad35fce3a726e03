//! # Observability & Tracing
//!
//! This module provides the tracing setup for the projects page.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function installs a compact `tracing-subscriber` formatter.
//! Module paths are hidden (`with_target(false)`); the structured fields carry the
//! context instead (`id`, `count`, `status`, `operation`).
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the configured
//! `log_filter`.
//!
//! ## What Gets Traced
//!
//! - **Controller lifecycle**: start, shutdown, final collection size
//! - **Page operations**: Initialize, Submit, Delete and their outcomes
//! - **HTTP requests**: method, path, status, body size
//! - **Failures**: every failed fetch, save and delete, at `error` level
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info projects-page list
//!
//! # Every request and form transition
//! RUST_LOG=debug projects-page render
//!
//! # Only the HTTP layer
//! RUST_LOG=resource_client=debug projects-page list
//! ```
//!
//! ## Workflow Trace Example
//!
//! Creating a project with `RUST_LOG=debug`:
//!
//! ```text
//! DEBUG initialize: Initialize
//! INFO Loaded count=2
//! DEBUG Form open=true
//! DEBUG submit_form: Submit editing=false
//! DEBUG save: Creating project
//! INFO Saved count=3
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr. Calling it again is a no-op.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
