use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
    #[error("empty response received for page {page}")]
    EmptyResponse { page: u32 },
    #[error("unexpected http status {0} with empty body")]
    Status(u16),
    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read fixture {path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("invalid request: {0}")]
    Request(#[source] reqwest::Error),
    #[cfg(any(test, feature = "mock"))]
    #[error("mock transport has no response left for page {0}")]
    MockExhausted(u32),
}

impl ProviderError {
    /// Only transport level failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProviderError::Transport(_))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        // Builder, redirect and decode errors cannot be fixed by sending again
        if e.is_connect() || e.is_timeout() || e.is_request() || e.is_body() {
            ProviderError::Transport(Box::new(e))
        } else {
            ProviderError::Request(e)
        }
    }
}
