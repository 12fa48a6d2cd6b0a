//! `temperatures` - current temperature by CEP or coordinates
//!
//! This library classifies a location string, resolves Brazilian postal codes
//! (CEP) into coordinates and looks up the current temperature there, and
//! exposes the lookup as `GET /temperature/{location}`.

pub mod api;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod location_resolver;
pub mod models;
pub mod telemetry;
pub mod weather;
pub mod weather_service;
pub mod web;

#[cfg(test)]
mod test_support;

// Re-export core types for public API
pub use api::AppState;
pub use config::TemperaturesConfig;
pub use error::{INVALID_LOCATION_MESSAGE, TemperatureError};
pub use geocoding::{AwesomeApiClient, LocationGateway};
pub use location_resolver::LocationResolver;
pub use models::{Coordinates, GetWeatherInput, LocationKind, WeatherOutput, WeatherReading};
pub use weather::{WeatherApiClient, WeatherGateway};
pub use weather_service::WeatherService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent to upstream providers
pub const USER_AGENT: &str = concat!("temperatures/", env!("CARGO_PKG_VERSION"));

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TemperatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert!(USER_AGENT.ends_with(VERSION));
    }
}
