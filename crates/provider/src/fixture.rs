use crate::{ProviderError, Transport, TransferRequest};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Serves the same JSON document for every request. The file must follow the
/// live response schema.
#[derive(Debug, Clone)]
pub struct FixtureTransport {
    path: PathBuf,
}

impl FixtureTransport {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn fetch(&self, request: &TransferRequest) -> Result<String, ProviderError> {
        info!(page = request.page, "Using mock data from {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProviderError::Fixture {
                path: self.path.clone(),
                source,
            })
    }
}
