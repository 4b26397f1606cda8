use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
const DEFAULT_USER_AGENT: &str = "ForecastProxy/0.1";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub weather_api_base_url: String,
    pub weather_api_user_agent: String,
    pub weather_api_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_api_base_url: DEFAULT_BASE_URL.to_string(),
            weather_api_user_agent: DEFAULT_USER_AGENT.to_string(),
            weather_api_timeout_secs: 30,
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            weather_api_base_url: env::var("WEATHER_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.weather_api_base_url),
            weather_api_user_agent: env::var("WEATHER_API_USER_AGENT")
                .unwrap_or(defaults.weather_api_user_agent),
            weather_api_timeout_secs: match env::var("WEATHER_API_TIMEOUT_SECS") {
                Ok(value) => value.parse().map_err(|_| {
                    anyhow::anyhow!("WEATHER_API_TIMEOUT_SECS is not a number: {}", value)
                })?,
                Err(_) => defaults.weather_api_timeout_secs,
            },
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: match env::var("SERVER_PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("SERVER_PORT is not a valid port: {}", value))?,
                Err(_) => defaults.server_port,
            },
        })
    }

    /// Address the server binds to, e.g. `0.0.0.0:8080`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
