use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{forecast::WeatherGovClient, temperature::describe_temperature};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub weather_client: Arc<WeatherGovClient>,
}

// Raw strings so that missing and unparseable coordinates get distinct 400s
#[derive(Debug, Default)]
pub struct ForecastQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl ForecastQuery {
    /// Repeated keys keep their first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "lat" if query.lat.is_none() => query.lat = Some(value),
                "lon" if query.lon.is_none() => query.lon = Some(value),
                _ => {}
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub latitude: f64,
    pub longitude: f64,
    pub short_forecast: String,
    pub temperature: i64,
    pub temperature_description: String,
}

type ApiError = (StatusCode, String);

fn bad_request(message: &str) -> ApiError {
    tracing::warn!("Rejected forecast request: {}", message);
    (StatusCode::BAD_REQUEST, message.to_string())
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_forecast(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ForecastSummary>, ApiError> {
    let params = ForecastQuery::from_pairs(pairs);
    let (lat_str, lon_str) = match (params.lat.as_deref(), params.lon.as_deref()) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
        _ => return Err(bad_request("Missing latitude or longitude")),
    };

    let lat = parse_coordinate(lat_str).ok_or_else(|| bad_request("Invalid latitude"))?;
    let lon = parse_coordinate(lon_str).ok_or_else(|| bad_request("Invalid longitude"))?;

    let forecast_url = state
        .weather_client
        .get_forecast_url(lat, lon)
        .await
        .map_err(|e| {
            tracing::error!("Forecast URL lookup failed for {},{}: {}", lat, lon, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching forecast URL: {}", e),
            )
        })?;

    let period = state
        .weather_client
        .get_todays_forecast(&forecast_url)
        .await
        .map_err(|e| {
            tracing::error!("Forecast fetch failed for {}: {}", forecast_url, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching today's temperature: {}", e),
            )
        })?;

    tracing::info!(
        "Forecast for {},{} ({}): {}F, {}",
        lat,
        lon,
        period.name,
        period.temperature,
        period.short_forecast
    );

    Ok(Json(ForecastSummary {
        latitude: lat,
        longitude: lon,
        temperature_description: describe_temperature(period.temperature).to_string(),
        short_forecast: period.short_forecast,
        temperature: period.temperature,
    }))
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/forecast", get(get_forecast))
        .with_state(state)
}
