use crate::{assembler, ETLError, FetchReport, TransferFetcher};
use config::Config;
use provider::Transport;
use std::sync::Arc;
use tracing::info;
use types::SwapRecord;

/// Fetches a pool's transfers over a window and turns them into swaps.
pub struct SwapWorker {
    pub config: Config,
    fetcher: TransferFetcher,
}

impl SwapWorker {
    pub fn new(config: Config, transport: Arc<dyn Transport>) -> Result<Self, ETLError> {
        let fetcher = TransferFetcher::new(&config, transport)?;
        Ok(SwapWorker { config, fetcher })
    }

    /// Raw transfer rows for the window, without any processing.
    pub async fn get_transfers(&self, from_date: &str, to_date: &str) -> Result<FetchReport, ETLError> {
        self.fetcher.fetch(from_date, to_date).await
    }

    pub async fn get_swaps(&self, from_date: &str, to_date: &str) -> Result<Vec<SwapRecord>, ETLError> {
        let report = self.get_transfers(from_date, to_date).await?;
        let swaps = assembler::assemble(&report.transfers)?;
        info!(
            pool = %self.config.pool_address,
            page_size = self.config.page_size,
            transfers = report.transfers.len(),
            swaps = swaps.len(),
            degraded = report.stop.is_degraded(),
            "Assembled swaps"
        );
        Ok(swaps)
    }
}

/// Builds the transport for `config` and returns the pool's swaps over the
/// window. With `use_mock_data` the configured fixture file replaces the API.
pub async fn get_swaps(
    config: Config,
    from_date: &str,
    to_date: &str,
    use_mock_data: bool,
) -> Result<Vec<SwapRecord>, ETLError> {
    let transport = provider::connect(&config, use_mock_data)?;
    SwapWorker::new(config, transport)?
        .get_swaps(from_date, to_date)
        .await
}
