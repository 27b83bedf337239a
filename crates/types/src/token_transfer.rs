use crate::Flow;
use serde::{Deserialize, Serialize};

/// One raw transfer leg as reported by the activity endpoint.
///
/// `trans_id` is shared by every leg of the same transaction, so it is not a
/// unique key for this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEvent {
    #[serde(default)]
    pub block_id: Option<u64>,
    pub trans_id: String,
    pub block_time: i64,
    pub time: String,
    #[serde(default)]
    pub activity_type: Option<String>,
    pub from_address: String,
    pub to_address: String,
    pub token_address: String,
    pub token_decimals: u32,
    #[serde(with = "flexible_amount")]
    pub amount: u64,
    pub flow: Flow,
}

/// One response of the paginated transfer endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferPage {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<TransferEvent>,
    /// Next page cursor, when the server reports one
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

impl TransferPage {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Block time of the most recent row; pages are sorted newest first.
    pub fn newest_block_time(&self) -> Option<i64> {
        self.data.first().map(|transfer| transfer.block_time)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TransferEvent>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<TransferEvent>>::deserialize(deserializer)?.unwrap_or_default())
}

// The endpoint sends amounts as numbers, but large values may arrive quoted.
mod flexible_amount {
    use serde::{self, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }

    pub fn serialize<S>(amount: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*amount)
    }
}
