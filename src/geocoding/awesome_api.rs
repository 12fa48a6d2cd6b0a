use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::LocationGateway;
use crate::config::LocationConfig;
use crate::models::Coordinates;
use crate::{Result, TemperatureError, USER_AGENT};

const PROVIDER: &str = "AwesomeAPI";

/// AwesomeAPI CEP client
#[derive(Debug, Clone)]
pub struct AwesomeApiClient {
    client: Client,
    base_url: String,
}

/// Subset of the `/json/{cep}` response we rely on
#[derive(Debug, Deserialize)]
struct CepResponse {
    #[serde(default)]
    lat: String,
    #[serde(default)]
    lng: String,
}

impl AwesomeApiClient {
    /// Create a new client
    pub fn new(config: &LocationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TemperatureError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LocationGateway for AwesomeApiClient {
    #[instrument(skip(self))]
    async fn resolve(&self, postal_code: &str) -> Result<Option<Coordinates>> {
        let url = format!("{}/json/{}", self.base_url, postal_code);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TemperatureError::network(PROVIDER, e))?;

        let status = response.status();
        debug!(
            "CEP lookup answered {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        // 400 is returned for well-formed but impossible CEPs
        if status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST {
            warn!("CEP {} not found (HTTP {})", postal_code, status.as_u16());
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await;
            return Err(TemperatureError::upstream_response(
                PROVIDER,
                status.as_u16(),
                body,
            ));
        }

        let cep: CepResponse = response
            .json()
            .await
            .map_err(|e| TemperatureError::parse(PROVIDER, e.to_string()))?;

        if cep.lat.trim().is_empty() || cep.lng.trim().is_empty() {
            warn!("CEP {} has no coordinates", postal_code);
            return Ok(None);
        }

        let coordinates = Coordinates::from_parts(&cep.lat, &cep.lng);
        info!(
            "Resolved CEP {} to {} in {:.3}s",
            postal_code,
            coordinates,
            start_time.elapsed().as_secs_f64()
        );

        Ok(Some(coordinates))
    }
}
