//! # Client Errors
//!
//! This module defines the error type shared by every transport and resource
//! client. Keeping a single taxonomy means a caller handles a refused request
//! the same way whether it came from the network, the server, or the payload.

use crate::transport::Method;

/// Errors that can occur while talking to a resource API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, reset, DNS...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("{method} {path} returned HTTP {status}")]
    Status {
        method: Method,
        path: String,
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("Malformed response body: {0}")]
    Decode(String),

    /// The request payload could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
