pub mod nws;
pub mod types;

pub use nws::{ForecastError, WeatherGovClient};
