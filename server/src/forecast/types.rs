use serde::{Deserialize, Serialize};

/// Points lookup: only the link to the gridpoint forecast is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataResponse {
    pub properties: MetadataProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataProperties {
    pub forecast: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// One time-bucketed prediction, e.g. "Today" or "Tonight".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: i64,
    pub short_forecast: String,
}
