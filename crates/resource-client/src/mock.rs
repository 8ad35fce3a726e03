//! # Mock Transport
//!
//! This module provides utilities for testing code that depends on a
//! [`ResourceClient`](crate::ResourceClient) without a running server.
//!
//! ## Why Mock?
//!
//! A page controller, a CLI command or any other caller of a client is mostly
//! interested in *which* requests go out and *how* it reacts to the answers.
//! [`MockTransport`] answers from a queue of expectations and records every
//! request it sees, so tests stay fast and deterministic.
//!
//! ## Usage
//!
//! ```rust
//! use resource_client::mock::MockTransport;
//! use resource_client::{ApiRequest, Method, Transport};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect(Method::Delete, "/api/notes/1").return_status(204);
//!
//!     let response = mock
//!         .send(ApiRequest::new(Method::Delete, "/api/notes/1"))
//!         .await
//!         .unwrap();
//!     assert_eq!(response.status, 204);
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Holding a Response
//!
//! [`ExpectationBuilder::hold_until`] keeps a request pending until the test
//! releases it, which is how in-flight states are observed.

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

struct Expectation {
    method: Method,
    path: String,
    response: Result<ApiResponse, ApiError>,
    release: Option<oneshot::Receiver<()>>,
}

/// An in-memory [`Transport`] answering from queued expectations, in order.
///
/// Cloning shares the queue and the request log, so a test can keep one clone
/// while handing another to the code under test.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next request to be `method path`.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            release: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let expectation = {
            let mut exps = self.expectations.lock().unwrap();
            let next = exps.pop_front();
            self.requests.lock().unwrap().push(request.clone());
            next
        };

        let Some(expectation) = expectation else {
            panic!("Unexpected request: {} {}", request.method, request.path);
        };
        if expectation.method != request.method || expectation.path != request.path {
            panic!(
                "Expectation mismatch: expected {} {}, got {} {}",
                expectation.method, expectation.path, request.method, request.path
            );
        }

        if let Some(release) = expectation.release {
            let _ = release.await;
        }
        expectation.response
    }
}

/// Builder finishing an expectation with the response to give.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    release: Option<oneshot::Receiver<()>>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Holds the response until `release` fires (or its sender is dropped).
    pub fn hold_until(mut self, release: oneshot::Receiver<()>) -> Self {
        self.release = Some(release);
        self
    }

    /// Answers with `status` and `body` serialized as JSON.
    pub fn return_json<B: Serialize>(self, status: u16, body: &B) {
        let body = serde_json::to_string(body).unwrap();
        self.push(Ok(ApiResponse::new(status, body)));
    }

    /// Answers with `status` and a raw body.
    pub fn return_body(self, status: u16, body: &str) {
        self.push(Ok(ApiResponse::new(status, body)));
    }

    /// Answers with `status` and an empty body.
    pub fn return_status(self, status: u16) {
        self.push(Ok(ApiResponse::new(status, "")));
    }

    /// Fails the request without a response.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ApiResponse, ApiError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
            release: self.release,
        });
    }
}
