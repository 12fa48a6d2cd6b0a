//! Temperature lookup use case
//!
//! Classifies the caller's location, resolves CEPs to coordinates and asks the
//! weather provider for the current temperature. Calls run strictly in
//! sequence; timeouts belong to the gateways and the HTTP layer.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::Result;
use crate::geocoding::LocationGateway;
use crate::location_resolver::LocationResolver;
use crate::models::{GetWeatherInput, WeatherOutput};
use crate::weather::WeatherGateway;

/// Orchestrates the location and weather gateways
#[derive(Clone)]
pub struct WeatherService {
    location_gateway: Arc<dyn LocationGateway>,
    weather_gateway: Arc<dyn WeatherGateway>,
}

impl WeatherService {
    pub fn new(
        location_gateway: Arc<dyn LocationGateway>,
        weather_gateway: Arc<dyn WeatherGateway>,
    ) -> Self {
        Self {
            location_gateway,
            weather_gateway,
        }
    }

    /// Look up the current temperature for `input.location`.
    ///
    /// - `Err(InvalidLocationFormat)` when the location is neither a CEP nor a
    ///   coordinate pair; no gateway is called.
    /// - `Ok(None)` when the CEP is unknown; the weather gateway is not called.
    /// - Gateway failures are returned unchanged.
    #[instrument(skip(self, input), fields(location = %input.location))]
    pub async fn execute(&self, input: GetWeatherInput) -> Result<Option<WeatherOutput>> {
        let Some(coordinates) =
            LocationResolver::resolve_location(self.location_gateway.as_ref(), &input.location)
                .await?
        else {
            info!("Location not found");
            return Ok(None);
        };

        let reading = self.weather_gateway.get_temperature(&coordinates).await?;
        info!(
            "Temperature at {} is {}",
            coordinates,
            reading.format_temperature()
        );

        Ok(Some(WeatherOutput {
            coordinates,
            reading,
        }))
    }
}
