//! Current temperature lookup by coordinates

use async_trait::async_trait;

use crate::Result;
use crate::models::{Coordinates, WeatherReading};

pub mod weather_api;

pub use weather_api::WeatherApiClient;

/// Fetches the current temperature at a coordinate pair
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    async fn get_temperature(&self, coordinates: &Coordinates) -> Result<WeatherReading>;
}
