//! WeatherAPI.com client for current conditions

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::WeatherGateway;
use crate::config::WeatherConfig;
use crate::models::{Coordinates, WeatherReading};
use crate::{Result, TemperatureError, USER_AGENT};

const PROVIDER: &str = "WeatherAPI";

/// WeatherAPI.com client
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentData,
}

#[derive(Debug, Deserialize)]
struct CurrentData {
    temp_c: f64,
    temp_f: f64,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TemperatureError::config(
                    "No WeatherAPI key configured. Set TEMPERATURES_WEATHER__API_KEY or weather.api_key.",
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TemperatureError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WeatherGateway for WeatherApiClient {
    #[instrument(skip(self))]
    async fn get_temperature(&self, coordinates: &Coordinates) -> Result<WeatherReading> {
        let url = format!("{}/current.json", self.base_url);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", coordinates.as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await
            .map_err(|e| TemperatureError::network(PROVIDER, e))?;

        let status = response.status();
        debug!("HTTP response received: {}", status);

        if !status.is_success() {
            let body = response.text().await;
            warn!("WeatherAPI request failed with status {}", status);
            return Err(TemperatureError::upstream_response(
                PROVIDER,
                status.as_u16(),
                body,
            ));
        }

        let parsed: CurrentResponse = response
            .json()
            .await
            .map_err(|e| TemperatureError::parse(PROVIDER, e.to_string()))?;

        let total_duration = start_time.elapsed();
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow API response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        let reading = WeatherReading {
            temp_c: parsed.current.temp_c,
            temp_f: parsed.current.temp_f,
        };
        info!(
            "Retrieved current temperature {} in {:.3}s",
            reading.format_temperature(),
            total_duration.as_secs_f64()
        );

        Ok(reading)
    }
}
