pub mod token_transfer;
pub use token_transfer::{TransferEvent, TransferPage};

pub mod transfer_type;
pub use transfer_type::Flow;

pub mod swap;
pub use swap::{NormalizedTransfer, SwapRecord};

pub mod sync;
pub use sync::StopReason;
