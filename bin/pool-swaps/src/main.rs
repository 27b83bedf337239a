mod logging;
use std::path::PathBuf;

use logging::init_logging;
mod app_config;
mod app_transport;
use anyhow::bail;
use app_transport::TransportType;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use etl::SwapWorker;

mod swaps;
use swaps::SwapsArgs;

mod transfers;
use transfers::TransfersArgs;

const DEFAULT_POOL: &str = "8phK65jxmTPEN158xLgSr4oZvssw9SyTErpNZj3g7px4";

/// Commands for pool-swaps application
#[derive(Debug, Parser)]
#[clap(name = "pool-swaps", author, version, about)]
pub(crate) struct Args {
    /// API key for the Solscan Pro API
    #[clap(short = 'k', long, env = "SOLSCAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Pool account whose transfers are analyzed
    #[clap(short, long, env, default_value = DEFAULT_POOL)]
    pub pool_address: String,

    /// Base URL of the activity API
    #[clap(long, env)]
    pub base_url: Option<String>,

    #[clap(long, env, default_value_t, value_enum)]
    /// Where transfer pages come from: the live API or the offline fixture
    pub transport: TransportType,

    #[clap(long, env)]
    /// JSON file served when the fixture transport is selected
    pub fixture_path: Option<PathBuf>,

    #[clap(long, env, default_value = "200")]
    /// Delay between two page requests, in milliseconds
    pub pacing_delay_ms: u64,

    #[clap(long, env, default_value = "200")]
    /// Delay before retrying a failed request, in milliseconds
    pub retry_delay_ms: u64,

    #[clap(long, env, default_value = "2")]
    /// Attempts per request before giving up
    pub max_attempts: u32,

    #[clap(long, env)]
    /// Stop after this many pages
    pub max_pages: Option<u32>,

    #[clap(long, env, default_value = "30")]
    /// Per request timeout, in seconds
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
#[command(subcommand_help_heading = "Solana pool swaps ETL (Extract, Transform, Load) tool")]
pub enum Commands {
    /// Print the swaps of the pool over a window
    #[command(subcommand_help_heading = "Swaps")]
    Swaps(SwapsArgs),

    /// Print the raw transfers of the pool over a window
    #[command(subcommand_help_heading = "Transfers")]
    Transfers(TransfersArgs),
}

impl Args {
    pub(crate) async fn exec(&self) -> anyhow::Result<()> {
        let config = self.load_config();
        if self.transport == TransportType::Solscan && config.api_key.is_empty() {
            bail!("SOLSCAN_API_KEY is not set, pass --api-key or use --transport fixture");
        }
        let transport = self.choose_transport(&config)?;
        let worker = SwapWorker::new(config, transport)?;

        match &self.command {
            Commands::Swaps(swaps_args) => swaps_args.exec(&worker).await,
            Commands::Transfers(transfers_args) => transfers_args.exec(&worker).await,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cmd = Args::parse();
    cmd.exec().await
}
