use crate::{ProviderError, Transport, TransferRequest};
use config::Config;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, warn};
use types::TransferPage;

/// Runs one request with a bounded number of attempts.
///
/// Transport failures are retried after `retry_delay` until `max_attempts`
/// is reached. An empty body and every other failure are returned at once.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
    max_attempts: u32,
    retry_delay: Duration,
}

impl RequestExecutor {
    pub fn new(transport: Arc<dyn Transport>, max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            transport,
            max_attempts: max_attempts.max(1),
            retry_delay,
        }
    }

    pub fn from_config(transport: Arc<dyn Transport>, config: &Config) -> Self {
        Self::new(transport, config.max_attempts, config.retry_delay)
    }

    pub async fn execute(&self, request: &TransferRequest) -> Result<TransferPage, ProviderError> {
        let mut attempt = 1;
        loop {
            match self.try_execute(request).await {
                Ok(page) => return Ok(page),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    warn!(attempt, page = request.page, "Request failed: {}. Retrying...", e);
                    sleep(self.retry_delay).await;
                    attempt += 1;
                }
                Err(e) if e.is_retryable() => {
                    error!(page = request.page, "Failed after {} attempts: {}", attempt, e);
                    return Err(e);
                }
                Err(e) => {
                    error!(page = request.page, "Request error: {}", e);
                    return Err(e);
                }
            }
        }
    }

    async fn try_execute(&self, request: &TransferRequest) -> Result<TransferPage, ProviderError> {
        let body = self.transport.fetch(request).await?;
        if body.trim().is_empty() {
            return Err(ProviderError::EmptyResponse { page: request.page });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
