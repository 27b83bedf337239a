use crate::Args;
use config::Config;
use provider::{ProviderError, Transport};
use std::sync::Arc;

#[derive(clap::ValueEnum, Clone, Default, Debug, PartialEq, Eq)]
pub enum TransportType {
    #[default]
    Solscan,
    Fixture,
}

impl Args {
    pub fn choose_transport(&self, config: &Config) -> Result<Arc<dyn Transport>, ProviderError> {
        provider::connect(config, self.transport == TransportType::Fixture)
    }
}
