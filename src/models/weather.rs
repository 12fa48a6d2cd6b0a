//! Weather use case input and output models

use serde::{Deserialize, Serialize};

use super::location::Coordinates;

/// Input of a temperature lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetWeatherInput {
    /// Raw location string: a CEP or a `lat,lng` pair
    pub location: String,
}

impl GetWeatherInput {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Temperature as reported by the weather provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in Celsius
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    /// Temperature in Fahrenheit
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
}

impl WeatherReading {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C ({:.1}°F)", self.temp_c, self.temp_f)
    }
}

/// Successful lookup result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherOutput {
    pub coordinates: Coordinates,
    #[serde(flatten)]
    pub reading: WeatherReading,
}
