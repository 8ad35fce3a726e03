//! # Project Client
//!
//! Provides the three operations the projects page needs from `/api/projects`:
//! list, save (create-or-update) and delete. It wraps a
//! `ResourceClient<Project>`; `list` and `delete` come from [`ApiClient`].
use crate::model::{Project, ProjectDraft};
use resource_client::{ApiClient, ApiError, ResourceClient, Transport};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Client for the projects collection.
#[derive(Clone)]
pub struct ProjectClient {
    inner: ResourceClient<Project>,
}

impl ProjectClient {
    pub fn new(inner: ResourceClient<Project>) -> Self {
        Self { inner }
    }

    pub fn from_transport(transport: Arc<dyn Transport>) -> Self {
        Self::new(ResourceClient::new(transport))
    }

    /// Saves the form payload.
    ///
    /// With an `existing` project this is an update addressed by its id,
    /// otherwise a creation. Callers only learn whether it worked; they are
    /// expected to re-list to see the stored record.
    #[instrument(skip(self, draft, existing), fields(id = existing.map(|p| p.id.as_str())))]
    pub async fn save(&self, draft: &ProjectDraft, existing: Option<&Project>) -> Result<(), ApiError> {
        let result = match existing {
            Some(project) => {
                debug!("Updating project");
                self.inner.update(&project.id, draft).await
            }
            None => {
                debug!("Creating project");
                self.inner.create(draft).await
            }
        };
        if let Err(e) = &result {
            error!(error = %e, "Failed to save project");
        }
        result
    }
}

impl ApiClient<Project> for ProjectClient {
    fn inner(&self) -> &ResourceClient<Project> {
        &self.inner
    }
}
