use provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum ETLError {
    #[error("pool address must not be empty")]
    EmptyPoolAddress,
    #[error("invalid date {0:?}, expected YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or RFC 3339")]
    InvalidDate(String),
    #[error("window starts at {from} which is after its end {to}")]
    InvalidWindow { from: String, to: String },
    #[error("transfer {trans_id} has malformed time {time:?}")]
    MalformedTime { trans_id: String, time: String },
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
