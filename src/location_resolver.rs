//! Location Resolution Module
//!
//! Turns a raw location string into coordinates: coordinate pairs are used
//! as given, CEPs are looked up through a [`LocationGateway`].

use tracing::debug;

use crate::geocoding::LocationGateway;
use crate::models::{Coordinates, LocationKind};
use crate::{Result, TemperatureError};

/// Service for resolving location inputs
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a raw location string.
    ///
    /// Returns `Ok(None)` when a CEP is well formed but unknown to the gateway.
    pub async fn resolve_location(
        gateway: &dyn LocationGateway,
        raw: &str,
    ) -> Result<Option<Coordinates>> {
        let kind = LocationKind::classify(raw);
        debug!("Resolving location input {:?} as {:?}", raw, kind);

        match kind {
            LocationKind::Invalid => Err(TemperatureError::InvalidLocationFormat),
            LocationKind::Coordinates => Ok(Some(Coordinates::new(raw))),
            LocationKind::PostalCode => Self::resolve_postal_code(gateway, raw).await,
        }
    }

    async fn resolve_postal_code(
        gateway: &dyn LocationGateway,
        postal_code: &str,
    ) -> Result<Option<Coordinates>> {
        debug!("Looking up postal code: {}", postal_code);

        let coordinates = gateway
            .resolve(postal_code)
            .await?
            .filter(|coordinates| !coordinates.is_empty());

        if coordinates.is_none() {
            debug!("Postal code {} not found", postal_code);
        }

        Ok(coordinates)
    }
}
