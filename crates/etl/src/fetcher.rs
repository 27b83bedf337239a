use crate::{dates::parse_date, ETLError};
use config::Config;
use provider::{RequestExecutor, TransferRequest, Transport};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use types::{StopReason, TransferEvent};

/// Everything a fetch collected, and why it stopped.
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub transfers: Vec<TransferEvent>,
    /// Pages that returned a response
    pub pages: u32,
    /// Newest block time of the last page with rows
    pub watermark: Option<i64>,
    pub stop: StopReason,
}

/// Walks the transfer endpoint newest first, one page at a time, until the
/// watermark reaches the end of the window or the server runs out of pages.
pub struct TransferFetcher {
    executor: RequestExecutor,
    pool_address: String,
    page_size: u32,
    pacing_delay: Duration,
    max_pages: Option<u32>,
}

impl TransferFetcher {
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Result<Self, ETLError> {
        let pool_address = config.pool_address.trim();
        if pool_address.is_empty() {
            return Err(ETLError::EmptyPoolAddress);
        }
        Ok(Self {
            executor: RequestExecutor::from_config(transport, config),
            pool_address: pool_address.to_string(),
            page_size: config.page_size,
            pacing_delay: config.pacing_delay,
            max_pages: config.max_pages,
        })
    }

    pub async fn fetch(&self, from_date: &str, to_date: &str) -> Result<FetchReport, ETLError> {
        let from_time = parse_date(from_date)?;
        let to_time = parse_date(to_date)?;
        if from_time > to_time {
            return Err(ETLError::InvalidWindow {
                from: from_date.to_string(),
                to: to_date.to_string(),
            });
        }
        self.fetch_window(from_time, to_time).await
    }

    pub async fn fetch_window(&self, from_time: i64, to_time: i64) -> Result<FetchReport, ETLError> {
        let mut transfers: Vec<TransferEvent> = Vec::new();
        let mut page = 1;
        let mut pages = 0;
        let mut watermark: Option<i64> = None;

        info!(
            pool = %self.pool_address,
            from_time, to_time, "Fetching pool transfers"
        );

        let stop = loop {
            if self.max_pages.is_some_and(|max| pages >= max) {
                break StopReason::PageLimit;
            }

            let request =
                TransferRequest::new(&self.pool_address, from_time, to_time, page, self.page_size);
            let response = match self.executor.execute(&request).await {
                Ok(response) => response,
                Err(e) if !transfers.is_empty() => {
                    error!(
                        last_block_time = ?watermark,
                        rows = transfers.len(),
                        "Error occurred while fetching transactions: {}", e
                    );
                    break StopReason::Degraded;
                }
                Err(e) => return Err(e.into()),
            };
            pages += 1;

            if response.is_empty() {
                match watermark {
                    Some(last_block_time) => warn!(
                        page,
                        last_block_time,
                        errors = ?response.errors,
                        "Transfer page came back empty"
                    ),
                    None => warn!(errors = ?response.errors, "No transfers returned for the window"),
                }
                break StopReason::EmptyPage;
            }

            watermark = response.newest_block_time();
            debug!(page, rows = response.data.len(), watermark = ?watermark, "Fetched transfer page");
            transfers.extend(response.data);

            let next_page = match response.page_number {
                Some(next) if next > page => next,
                Some(next) => {
                    warn!(page, next, "Server reported a page cursor that does not advance");
                    break StopReason::NoNextPage;
                }
                None => break StopReason::NoNextPage,
            };
            if watermark.is_some_and(|last_block_time| last_block_time >= to_time) {
                break StopReason::WindowCovered;
            }
            page = next_page;

            sleep(self.pacing_delay).await;
        };

        info!(
            rows = transfers.len(),
            pages,
            stop = ?stop,
            "Finished fetching pool transfers"
        );
        Ok(FetchReport {
            transfers,
            pages,
            watermark,
            stop,
        })
    }
}
