use crate::{ProviderError, Transport, TransferRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays a fixed script of responses, one per request, and records every
/// request it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<TransferRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, body: impl Into<String>) -> Self {
        self.push(Ok(body.into()));
        self
    }

    pub fn with_error(self, error: ProviderError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, response: Result<String, ProviderError>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    pub fn requests(&self) -> Vec<TransferRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, request: &TransferRequest) -> Result<String, ProviderError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front());
        next.unwrap_or(Err(ProviderError::MockExhausted(request.page)))
    }
}
