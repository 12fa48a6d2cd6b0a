use axum::{
    BoxError, Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::TemperatureError;
use crate::models::GetWeatherInput;
use crate::weather_service::WeatherService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    service: WeatherService,
}

impl AppState {
    #[must_use]
    pub fn new(service: WeatherService) -> Self {
        Self { service }
    }
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Failures of the temperature endpoint, one per status code
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid location")]
    InvalidLocation,

    #[error("location not found")]
    LocationNotFound,

    #[error("not found")]
    RouteNotFound,

    #[error("internal server error")]
    Internal { message: String, upstream: bool },
}

impl From<TemperatureError> for ApiError {
    fn from(err: TemperatureError) -> Self {
        match err {
            TemperatureError::InvalidLocationFormat => Self::InvalidLocation,
            other => Self::Internal {
                upstream: other.is_upstream(),
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidLocation => StatusCode::UNPROCESSABLE_ENTITY,
            Self::LocationNotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Internal { message, upstream } => {
                tracing::error!(error = %message, upstream, "Temperature request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/temperature/{location}", get(get_temperature))
        .fallback(fallback)
        .with_state(state)
}

/// Map failures of the outer middleware (timeouts) onto the JSON error body
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    let message = if err.is::<tower::timeout::error::Elapsed>() {
        "Request timed out".to_string()
    } else {
        format!("Unhandled middleware error: {err}")
    };
    ApiError::Internal {
        message,
        upstream: false,
    }
}

async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}

async fn get_temperature(
    State(state): State<AppState>,
    location: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    // A segment that does not decode to UTF-8 can be neither a CEP nor coordinates
    let Path(location) = location.map_err(|rejection| {
        tracing::debug!("Rejected location segment: {}", rejection);
        ApiError::InvalidLocation
    })?;

    let output = state
        .service
        .execute(GetWeatherInput::new(location))
        .await?
        .ok_or(ApiError::LocationNotFound)?;

    let value = serde_json::to_value(&output)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to encode response: {e}"),
            upstream: false,
        })?;
    Ok(Json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherReading;
    use crate::test_support::{
        LocationReply, StubLocationGateway, StubWeatherGateway, WeatherReply,
    };
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use rstest::rstest;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    const READING: WeatherReading = WeatherReading {
        temp_c: 18.5,
        temp_f: 65.3,
    };

    fn app(location: LocationReply, weather: WeatherReply) -> Router {
        let service = WeatherService::new(
            Arc::new(StubLocationGateway::new(location)),
            Arc::new(StubWeatherGateway::new(weather)),
        );
        router(AppState::new(service))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, content_type, body)
    }

    #[tokio::test]
    async fn test_found_location_returns_temperature() {
        let app = app(
            LocationReply::Found("-23.55,-46.63"),
            WeatherReply::Reading(READING),
        );

        let (status, content_type, body) = get(app, "/temperature/01001001").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            json!({"coordinates": "-23.55,-46.63", "temp_C": 18.5, "temp_F": 65.3})
        );
    }

    #[tokio::test]
    async fn test_coordinates_are_echoed_back() {
        let app = app(LocationReply::Fails, WeatherReply::Reading(READING));

        let (status, _, body) = get(app, "/temperature/-23.55028,-46.63389").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["coordinates"], "-23.55028,-46.63389");
    }

    #[tokio::test]
    async fn test_invalid_location_is_422() {
        let app = app(LocationReply::NotFound, WeatherReply::Reading(READING));

        let (status, content_type, body) = get(app, "/temperature/abc").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, json!({"error": "invalid location"}));
    }

    #[tokio::test]
    async fn test_percent_encoded_space_is_still_invalid() {
        let app = app(LocationReply::NotFound, WeatherReply::Reading(READING));

        let (status, _, _) = get(app, "/temperature/-23.5,%20-46.6").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_non_utf8_location_is_422() {
        let app = app(LocationReply::NotFound, WeatherReply::Reading(READING));

        let (status, content_type, body) = get(app, "/temperature/%FF%FE").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, json!({"error": "invalid location"}));
    }

    #[rstest]
    #[case("/temperature/")]
    #[case("/temperature")]
    #[case("/weather/01001001")]
    #[tokio::test]
    async fn test_unknown_route_is_json_404(#[case] uri: &str) {
        let app = app(LocationReply::NotFound, WeatherReply::Reading(READING));

        let (status, content_type, body) = get(app, uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn test_unknown_postal_code_is_404() {
        let app = app(LocationReply::NotFound, WeatherReply::Reading(READING));

        let (status, _, body) = get(app, "/temperature/99999999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "location not found"}));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500() {
        let app = app(
            LocationReply::Found("-23.55,-46.63"),
            WeatherReply::Fails,
        );

        let (status, _, body) = get(app, "/temperature/01001001").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "internal server error"}));
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            ApiError::from(TemperatureError::InvalidLocationFormat),
            ApiError::InvalidLocation
        ));
        assert!(matches!(
            ApiError::from(TemperatureError::config("boom")),
            ApiError::Internal { upstream: false, .. }
        ));
        assert!(matches!(
            ApiError::from(TemperatureError::upstream("WeatherAPI", 500, "boom")),
            ApiError::Internal { upstream: true, .. }
        ));
    }

    #[tokio::test]
    async fn test_timeout_maps_to_internal_error() {
        let err = handle_middleware_error(tower::timeout::error::Elapsed::new().into()).await;
        assert!(matches!(err, ApiError::Internal { upstream: false, .. }));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"error": "internal server error"}));
    }
}
