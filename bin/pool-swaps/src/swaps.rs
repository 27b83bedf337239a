use clap::Parser;
use etl::SwapWorker;
use types::SwapRecord;

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser, Debug)]
pub struct SwapsArgs {
    #[clap(short, long)]
    /// Start of the window (YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or RFC 3339)
    from_date: String,

    #[clap(short, long)]
    /// End of the window
    to_date: String,

    #[clap(long, default_value_t, value_enum)]
    format: OutputFormat,
}

impl SwapsArgs {
    pub async fn exec(&self, worker: &SwapWorker) -> anyhow::Result<()> {
        let swaps = worker.get_swaps(&self.from_date, &self.to_date).await?;
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&swaps)?),
            OutputFormat::Table => print_table(&swaps),
        }
        Ok(())
    }
}

fn print_table(swaps: &[SwapRecord]) {
    println!(
        "{:<88} {:<19} {:>10} {:<44} {:<44} {:>20} {:<44} {:>20}",
        "trans_id",
        "datetime",
        "timestamp",
        "owner_address",
        "token_in_address",
        "amount_in",
        "token_out_address",
        "amount_out"
    );
    for swap in swaps {
        println!(
            "{:<88} {:<19} {:>10} {:<44} {:<44} {:>20} {:<44} {:>20}",
            swap.trans_id,
            swap.datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            swap.timestamp,
            swap.owner_address,
            swap.token_in_address,
            swap.amount_in,
            swap.token_out_address,
            swap.amount_out
        );
    }
    println!("[{} rows]", swaps.len());
}
