use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::forecast::{ForecastError, WeatherGovClient};
use crate::routes::{create_router, AppState};

/// The forecast HTTP service, assembled from an explicit [`Config`].
pub struct Server {
    config: Config,
    router: Router,
}

impl Server {
    pub fn new(config: Config) -> Result<Self, ForecastError> {
        let weather_client = Arc::new(WeatherGovClient::new(&config)?);
        let state = AppState { weather_client };

        let router = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        Ok(Self { config, router })
    }

    pub async fn run(self) -> std::io::Result<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address).await?;
        tracing::info!("Server starting on http://{}", address);

        self.serve(listener).await
    }

    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        tracing::info!(
            "Proxying forecasts from {}",
            self.config.weather_api_base_url
        );
        axum::serve(listener, self.router).await
    }
}
