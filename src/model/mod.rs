//! Pure data structures (DTOs) implementing the [`ApiEntity`](resource_client::ApiEntity) trait.

pub mod project;

pub use project::*;
