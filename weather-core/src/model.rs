use serde::{Deserialize, Serialize};

/// A single weather request as typed by the user. The city is free text and
/// travels to the upstream API verbatim; validation and matching are its job.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Current conditions for one city, as far as the upstream reported them.
///
/// Every field is optional on purpose: OpenWeather omits fields it has no
/// data for, and a partial payload must still yield a report (missing values
/// render as a placeholder, see [`crate::format`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherReport {
    pub description: Option<String>,
    pub temperature_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub humidity_pct: Option<u8>,
    pub wind_speed_mps: Option<f64>,
}
