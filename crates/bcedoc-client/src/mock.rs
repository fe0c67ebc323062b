//! Recording transport double for testing.
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! bcedoc-client = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use bcedoc_client::{DocumentApi, DocumentClient, MockTransport};
//!
//! let transport = MockTransport::new();
//! transport.push_json(200, serde_json::json!({ "documentId": "doc-1", "status": "PUBLISHED" }));
//!
//! let client = DocumentClient::new(transport.clone());
//! client.query("doc-1", None).await?;
//! assert_eq!(transport.call_count(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{DocumentRequest, DocumentResponse, DocumentTransport, Error, Result};

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<DocumentResponse>>,
    requests: Vec<DocumentRequest>,
}

/// Transport that records every request and replays queued responses.
///
/// Responses are returned in the order they were queued. A request arriving
/// with nothing queued fails with a network error.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("MockTransport")
            .field("queued", &state.responses.len())
            .field("recorded", &state.requests.len())
            .finish()
    }
}

impl MockTransport {
    /// Creates a transport with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queues a response.
    pub fn push_response(&self, response: DocumentResponse) {
        self.state().responses.push_back(Ok(response));
    }

    /// Queues a response with a JSON body.
    pub fn push_json(&self, status_code: u16, body: serde_json::Value) {
        let response = DocumentResponse::new(status_code, body.to_string());
        self.push_response(response);
    }

    /// Queues a transport failure.
    pub fn push_error(&self, error: Error) {
        self.state().responses.push_back(Err(error));
    }

    /// Returns every request sent so far.
    pub fn requests(&self) -> Vec<DocumentRequest> {
        self.state().requests.clone()
    }

    /// Returns the most recent request.
    pub fn last_request(&self) -> Option<DocumentRequest> {
        self.state().requests.last().cloned()
    }

    /// Returns how many requests have been sent.
    pub fn call_count(&self) -> usize {
        self.state().requests.len()
    }
}

#[async_trait::async_trait]
impl DocumentTransport for MockTransport {
    async fn send(&self, request: &DocumentRequest) -> Result<DocumentResponse> {
        let mut state = self.state();
        state.requests.push(request.clone());
        state.responses.pop_front().unwrap_or_else(|| {
            Err(Error::network_error().with_message("no mock response queued"))
        })
    }
}
