//! Type-safe wrappers around [`ResourceClient`](resource_client::ResourceClient).

pub mod project_client;

pub use project_client::*;
