use clap::Parser;
use etl::SwapWorker;
use tracing::info;

#[derive(Parser, Debug)]
pub struct TransfersArgs {
    #[clap(short, long)]
    /// Start of the window
    from_date: String,

    #[clap(short, long)]
    /// End of the window
    to_date: String,
}

impl TransfersArgs {
    pub async fn exec(&self, worker: &SwapWorker) -> anyhow::Result<()> {
        let report = worker.get_transfers(&self.from_date, &self.to_date).await?;
        info!(
            pages = report.pages,
            rows = report.transfers.len(),
            watermark = ?report.watermark,
            stop = ?report.stop,
            "Fetched transfers"
        );
        for transfer in &report.transfers {
            println!("{}", serde_json::to_string(transfer)?);
        }
        Ok(())
    }
}
