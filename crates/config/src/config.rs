use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pro-api.solscan.io/v2.0";
pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/mock_data.json";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent in the `token` header of every request
    pub api_key: String,

    /// Base URL of the activity API, without a trailing slash
    pub base_url: String,

    /// Pool account whose transfers are fetched
    pub pool_address: String,

    /// Rows requested per page
    pub page_size: u32,

    /// Delay between two consecutive page requests
    pub pacing_delay: Duration,

    /// Delay before retrying a request that failed at the transport level
    pub retry_delay: Duration,

    /// How many times a single request is attempted
    pub max_attempts: u32,

    /// Stop after this many pages even if the window is not covered yet
    pub max_pages: Option<u32>,

    /// Per request timeout enforced by the HTTP client
    pub request_timeout: Duration,

    /// JSON file served instead of the network in offline mode
    pub fixture_path: PathBuf,
}

impl Config {
    pub fn new(api_key: String, pool_address: String) -> Self {
        Config {
            api_key,
            pool_address,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            pool_address: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            pacing_delay: Duration::from_millis(200),
            retry_delay: Duration::from_millis(200),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_pages: None,
            request_timeout: Duration::from_secs(30),
            fixture_path: PathBuf::from(DEFAULT_FIXTURE_PATH),
        }
    }
}
