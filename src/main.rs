use std::sync::Arc;

use anyhow::{Context, Result};
use temperatures::{
    AppState, AwesomeApiClient, TemperaturesConfig, WeatherApiClient, WeatherService, telemetry,
    web,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TemperaturesConfig::load().context("Failed to load configuration")?;
    telemetry::init(&config.logging)?;

    let location_gateway =
        AwesomeApiClient::new(&config.location).context("Failed to create CEP client")?;
    let weather_gateway =
        WeatherApiClient::new(&config.weather).context("Failed to create weather client")?;

    let service = WeatherService::new(Arc::new(location_gateway), Arc::new(weather_gateway));

    tracing::info!(
        "Starting temperatures {} on port {}",
        temperatures::VERSION,
        config.server.port
    );
    web::run(&config.server, AppState::new(service)).await
}
