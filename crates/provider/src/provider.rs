use crate::{FixtureTransport, ProviderError, TransferRequest};
use async_trait::async_trait;
use config::Config;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info};

/// Source of raw transfer pages. Implementations return the response body
/// untouched; decoding and retry decisions belong to the executor.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: &TransferRequest) -> Result<String, ProviderError>;
}

/// Live transport against the Solscan account transfer endpoint.
pub struct SolscanTransport {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl SolscanTransport {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ProviderError::Client)?;
        let url = format!("{}/account/transfer", config.base_url.trim_end_matches('/'));
        info!("Using transfer endpoint at {}", url);
        Ok(Self {
            client,
            url,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Transport for SolscanTransport {
    async fn fetch(&self, request: &TransferRequest) -> Result<String, ProviderError> {
        debug!(page = request.page, address = %request.address, "Requesting transfer page");
        let response = self
            .client
            .get(&self.url)
            .query(&request.query())
            .header("token", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::Transport(
                format!("server responded with {}", status).into(),
            ));
        }

        let body = response.text().await?;
        // Client errors usually carry an `errors` payload that the fetch loop reports
        if !status.is_success() && body.trim().is_empty() {
            return Err(ProviderError::Status(status.as_u16()));
        }
        Ok(body)
    }
}

/// Picks the fixture file in offline mode and the live endpoint otherwise.
pub fn connect(config: &Config, use_mock_data: bool) -> Result<Arc<dyn Transport>, ProviderError> {
    if use_mock_data {
        return Ok(Arc::new(FixtureTransport::new(config.fixture_path.clone())));
    }
    Ok(Arc::new(SolscanTransport::new(config)?))
}
