use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::LookupError;
use crate::model::{WeatherQuery, WeatherReport};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the OpenWeather "current weather" endpoint. Holds one
/// long-lived HTTP client; cheap to clone and share across handlers.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host. Tests use this to talk to a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReport, LookupError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "ru"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")
            .map_err(LookupError::Upstream)?;

        let status = res.status();
        if !status.is_success() {
            // Unknown city and every other rejection look the same to the
            // user, so the status is all we keep.
            return Err(LookupError::UnknownCity { status });
        }

        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")
            .map_err(LookupError::Upstream)?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .with_context(|| {
                format!(
                    "Failed to parse OpenWeather current JSON: {}",
                    truncate_body(&body)
                )
            })
            .map_err(LookupError::Upstream)?;

        Ok(parsed.into_report())
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, LookupError> {
        self.fetch_current(&query.city).await
    }
}

// Wire model. Everything is optional/defaulted so a sparse payload still
// produces a report; missing values surface as placeholders at render time.

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    main: OwMain,
    #[serde(default)]
    wind: OwWind,
}

impl OwCurrentResponse {
    fn into_report(self) -> WeatherReport {
        WeatherReport {
            description: self.weather.into_iter().next().and_then(|w| w.description),
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.speed,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
