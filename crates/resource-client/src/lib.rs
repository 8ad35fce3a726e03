//! # Resource Client
//!
//! This crate provides the building blocks for talking to a REST-style
//! collection API (`GET /things`, `POST /things`, `PUT /things/{id}`,
//! `DELETE /things/{id}`) in a type-safe way.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ApiEntity`]) - the record type, its id and its draft payload
//! 2. **Client Layer** ([`ResourceClient`], [`ApiClient`]) - request building and status handling
//! 3. **Transport Layer** ([`Transport`]) - moving bytes ([`ReqwestTransport`] or [`mock::MockTransport`])
//!
//! You describe a collection **once** by implementing [`ApiEntity`]; the client
//! handles paths, JSON encoding, status checks and the forgiving list decoding.
//!
//! ## Failure Model
//!
//! Every failure is an [`ApiError`]:
//!
//! - **Transport** - no response at all
//! - **Status** - the server refused a mutation
//! - **Decode** / **Encode** - the payload was not what we expected
//!
//! Listing is deliberately lenient: a body that is not a JSON array is an empty
//! collection, not an error. Nothing is retried.
//!
//! ## Testing
//!
//! [`mock::MockTransport`] implements [`Transport`] from a queue of expected
//! requests, so clients and everything built on them can be exercised without
//! a server.

pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod mock;
pub mod transport;

// Re-export core types for convenience
pub use client::ResourceClient;
pub use client_trait::ApiClient;
pub use entity::ApiEntity;
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, Method, ReqwestTransport, Transport};
