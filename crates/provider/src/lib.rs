mod error;
pub use error::ProviderError;

mod request;
pub use request::{TransferRequest, SPL_TRANSFER_ACTIVITY};

mod provider;
pub use provider::{connect, SolscanTransport, Transport};

mod fixture;
pub use fixture::FixtureTransport;

mod executor;
pub use executor::RequestExecutor;

#[cfg(any(test, feature = "mock"))]
pub mod mock;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
