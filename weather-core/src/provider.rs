use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::LookupError;
use crate::model::{WeatherQuery, WeatherReport};

pub mod openweather;

/// Seam between the lookup pipeline and the actual weather API. Production
/// uses [`openweather::OpenWeatherProvider`]; tests substitute stubs.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, LookupError>;
}
