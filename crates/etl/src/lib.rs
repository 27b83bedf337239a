mod error;
pub use error::ETLError;

pub mod dates;

mod fetcher;
pub use fetcher::{FetchReport, TransferFetcher};

pub mod assembler;

mod etl;
pub use etl::{get_swaps, SwapWorker};
