//! # Generic Client
//!
//! This module defines the generic client for a REST collection.

use crate::entity::ApiEntity;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type-safe, async API over the collection at
/// [`ApiEntity::COLLECTION`]. It builds requests, hands them to a [`Transport`],
/// and interprets the answers.
///
/// * **Cloneable** – holds only a shared transport, so cloning is inexpensive.
/// * **Status-aware** – any non-2xx answer to a mutation is an [`ApiError::Status`].
/// * **Forgiving listing** – JSON that is not an array degrades to empty; only a
///   body that is not JSON at all is an error.
pub struct ResourceClient<T: ApiEntity> {
    transport: Arc<dyn Transport>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: ApiEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            _entity: PhantomData,
        }
    }
}

impl<T: ApiEntity> ResourceClient<T> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _entity: PhantomData,
        }
    }

    /// Fetches the whole collection, bypassing response caches.
    ///
    /// A body that is not JSON at all is an [`ApiError::Decode`], so callers
    /// keep whatever they already hold. JSON that is not an array yields an
    /// empty list, whatever the status; array elements that do not decode as
    /// `T` are skipped.
    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        let request = ApiRequest::new(Method::Get, T::COLLECTION).no_store();
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            warn!(status = response.status, "List answered with an error status");
        }

        let items = match Self::decode_list(&response)? {
            serde_json::Value::Array(items) => items,
            other => {
                warn!(kind = json_kind(&other), "List response is not an array, treating as empty");
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<T>(item) {
                Ok(record) => records.push(record),
                Err(e) => warn!(index, error = %e, "Skipping malformed record"),
            }
        }
        debug!(count = records.len(), "Listed");
        Ok(records)
    }

    /// Creates a new member from `draft`.
    pub async fn create(&self, draft: &T::Draft) -> Result<(), ApiError> {
        let body = serde_json::to_value(draft)?;
        let request = ApiRequest::new(Method::Post, T::COLLECTION).with_body(body);
        self.send_expecting_success(request).await
    }

    /// Replaces the member addressed by `id` with `draft`.
    pub async fn update(&self, id: &T::Id, draft: &T::Draft) -> Result<(), ApiError> {
        let body = serde_json::to_value(draft)?;
        let request = ApiRequest::new(Method::Put, T::member_path(id)).with_body(body);
        self.send_expecting_success(request).await
    }

    /// Removes the member addressed by `id`.
    pub async fn delete(&self, id: &T::Id) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::Delete, T::member_path(id));
        self.send_expecting_success(request).await
    }

    fn decode_list(response: &ApiResponse) -> Result<serde_json::Value, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| {
            warn!(status = response.status, error = %e, "List response is not JSON");
            ApiError::Decode(e.to_string())
        })
    }

    async fn send_expecting_success(&self, request: ApiRequest) -> Result<(), ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        if response.is_success() {
            debug!(%method, %path, status = response.status, "Request succeeded");
            Ok(())
        } else {
            Err(ApiError::Status {
                method,
                path,
                status: response.status,
            })
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
