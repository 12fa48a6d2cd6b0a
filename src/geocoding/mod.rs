//! CEP to coordinates resolution

use async_trait::async_trait;

use crate::Result;
use crate::models::Coordinates;

pub mod awesome_api;

pub use awesome_api::AwesomeApiClient;

/// Resolves a postal code into coordinates.
///
/// `Ok(None)` means the provider does not know the CEP; transport and decoding
/// failures are reported as errors.
#[async_trait]
pub trait LocationGateway: Send + Sync {
    async fn resolve(&self, postal_code: &str) -> Result<Option<Coordinates>>;
}
