//! # ApiClient Trait
//!
//! Provides a common interface for collection-specific clients, adding default
//! `list` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ApiEntity, ApiError, ResourceClient};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit standard operations.
///
/// # Example
///
/// ```rust
/// use resource_client::{ApiClient, ApiEntity, ResourceClient};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Deserialize)]
/// struct Note { id: u32 }
/// #[derive(Debug, Serialize)]
/// struct NoteDraft;
///
/// impl ApiEntity for Note {
///     type Id = u32;
///     type Draft = NoteDraft;
///     const COLLECTION: &'static str = "/api/notes";
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// struct NoteClient {
///     inner: ResourceClient<Note>,
/// }
///
/// impl ApiClient<Note> for NoteClient {
///     fn inner(&self) -> &ResourceClient<Note> {
///         &self.inner
///     }
/// }
///
/// async fn usage(client: NoteClient) {
///     // list() and delete() are provided automatically
///     let _ = client.list().await;
///     let _ = client.delete(&1).await;
/// }
/// ```
#[async_trait]
pub trait ApiClient<T: ApiEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }

    /// Delete a member by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &T::Id) -> Result<(), ApiError> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
