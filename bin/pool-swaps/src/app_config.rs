use config::Config;
use std::time::Duration;

use crate::Args;

impl Args {
    pub fn load_config(&self) -> Config {
        let mut config = Config::new(
            self.api_key.clone().unwrap_or_default(),
            self.pool_address.clone(),
        );

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }

        if let Some(fixture_path) = &self.fixture_path {
            config.fixture_path = fixture_path.clone();
        }

        config.pacing_delay = Duration::from_millis(self.pacing_delay_ms);
        config.retry_delay = Duration::from_millis(self.retry_delay_ms);
        config.max_attempts = self.max_attempts;
        config.max_pages = self.max_pages;
        config.request_timeout = Duration::from_secs(self.timeout_secs);

        config
    }
}
