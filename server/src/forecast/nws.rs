use super::types::*;
use crate::config::Config;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to fetch data: {0}")]
    Upstream(StatusCode),
    #[error("JSON parsing failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no forecast periods found")]
    NotFound,
}

/// Client for the api.weather.gov points and gridpoint forecast endpoints.
pub struct WeatherGovClient {
    client: Client,
    base_url: String,
}

impl WeatherGovClient {
    pub fn new(config: &Config) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .user_agent(config.weather_api_user_agent.as_str())
            .timeout(Duration::from_secs(config.weather_api_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.weather_api_base_url.clone(),
        })
    }

    /// The API only resolves points to four decimal places and redirects
    /// anything finer, so coordinates are rounded here.
    pub fn metadata_url(&self, lat: f64, lon: f64) -> String {
        format!("{}/points/{:.4},{:.4}", self.base_url, lat, lon)
    }

    pub async fn get_forecast_url(&self, lat: f64, lon: f64) -> Result<String, ForecastError> {
        let url = self.metadata_url(lat, lon);
        let metadata: MetadataResponse = self.fetch_json(&url).await?;

        tracing::debug!("Resolved forecast URL {}", metadata.properties.forecast);
        Ok(metadata.properties.forecast)
    }

    /// Fetches the forecast and returns its first period, which the API
    /// orders so that the current part of the day comes first.
    pub async fn get_todays_forecast(
        &self,
        forecast_url: &str,
    ) -> Result<ForecastPeriod, ForecastError> {
        let forecast: ForecastResponse = self.fetch_json(forecast_url).await?;

        forecast
            .properties
            .periods
            .into_iter()
            .next()
            .ok_or(ForecastError::NotFound)
    }

    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ForecastError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/geo+json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Upstream returned {} for {}", status, url);
            return Err(ForecastError::Upstream(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header as header_matcher, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WeatherGovClient {
        let config = Config {
            weather_api_base_url: server.uri(),
            ..Config::default()
        };
        WeatherGovClient::new(&config).unwrap()
    }

    #[test]
    fn test_metadata_url_rounds_coordinates() {
        let client = WeatherGovClient::new(&Config::default()).unwrap();
        assert_eq!(
            client.metadata_url(39.7456, -97.08921),
            "https://api.weather.gov/points/39.7456,-97.0892"
        );
    }

    #[tokio::test]
    async fn test_get_forecast_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/points/39.7456,-97.0892"))
            .and(header_matcher("Accept", "application/geo+json"))
            .and(header_matcher("User-Agent", "ForecastProxy/0.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "properties": {
                    "gridId": "TOP",
                    "forecast": "https://api.weather.gov/gridpoints/TOP/32,81/forecast"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let url = client.get_forecast_url(39.7456, -97.0892).await.unwrap();

        assert_eq!(url, "https://api.weather.gov/gridpoints/TOP/32,81/forecast");
    }

    #[tokio::test]
    async fn test_get_forecast_url_upstream_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.get_forecast_url(39.7456, -97.0892).await.unwrap_err();

        assert!(matches!(err, ForecastError::Upstream(StatusCode::SERVICE_UNAVAILABLE)));
        assert_eq!(err.to_string(), "failed to fetch data: 503 Service Unavailable");
    }

    #[tokio::test]
    async fn test_get_forecast_url_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"properties\": "))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.get_forecast_url(39.7456, -97.0892).await.unwrap_err();

        assert!(matches!(err, ForecastError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_todays_forecast_returns_first_period() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gridpoints/TOP/32,81/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "properties": {
                    "periods": [
                        {"number": 1, "name": "Today", "temperature": 72, "temperatureUnit": "F", "shortForecast": "Sunny"},
                        {"number": 2, "name": "Tonight", "temperature": 51, "temperatureUnit": "F", "shortForecast": "Clear"}
                    ]
                }
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let url = format!("{}/gridpoints/TOP/32,81/forecast", mock_server.uri());
        let period = client.get_todays_forecast(&url).await.unwrap();

        assert_eq!(
            period,
            ForecastPeriod {
                name: "Today".to_string(),
                temperature: 72,
                short_forecast: "Sunny".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_todays_forecast_no_periods() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "properties": { "periods": [] }
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let url = format!("{}/gridpoints/TOP/32,81/forecast", mock_server.uri());
        let err = client.get_todays_forecast(&url).await.unwrap_err();

        assert!(matches!(err, ForecastError::NotFound));
        assert_eq!(err.to_string(), "no forecast periods found");
    }

    #[tokio::test]
    async fn test_network_error() {
        let client = WeatherGovClient::new(&Config::default()).unwrap();
        let unreachable = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);
            format!("http://{}/gridpoints/TOP/32,81/forecast", addr)
        };

        let err = client.get_todays_forecast(&unreachable).await.unwrap_err();

        assert!(matches!(err, ForecastError::Network(_)));
    }
}
