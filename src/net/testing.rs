//! Scripted transport for native unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::net::gateway::{GatewayError, RawRequest, RawResponse, Transport};

/// Replays a queue of scripted responses and records every request.
#[derive(Default)]
pub struct FakeTransport {
    requests: RefCell<Vec<RawRequest>>,
    responses: RefCell<VecDeque<Result<RawResponse, GatewayError>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and JSON body.
    pub fn push_response(&self, status: u16, body: serde_json::Value) {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queue a raw-text response, for empty or malformed bodies.
    pub fn push_text(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.to_owned(),
        }));
    }

    /// Queue a connectivity-level failure.
    pub fn push_error(&self, error: GatewayError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    /// Every request dispatched so far, oldest first.
    pub fn requests(&self) -> Vec<RawRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn dispatch(&self, request: RawRequest) -> Result<RawResponse, GatewayError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::network("no scripted response")))
    }
}
