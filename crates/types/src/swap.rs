use crate::Flow;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A transfer leg after timestamp parsing and decimal scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTransfer {
    pub trans_id: String,
    pub datetime: NaiveDateTime,
    pub timestamp: i64,
    pub amount: f64,
    pub from_address: String,
    pub to_address: String,
    pub token_address: String,
    pub flow: Flow,
}

/// One swap, built from an `in` leg and an `out` leg of the same transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub trans_id: String,
    pub datetime: NaiveDateTime,
    pub timestamp: i64,
    /// Sender of the `in` leg
    pub owner_address: String,
    pub token_in_address: String,
    pub amount_in: f64,
    pub token_out_address: String,
    pub amount_out: f64,
}
