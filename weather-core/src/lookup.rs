//! The Lookup operation: city name in, chat-ready text out.
//!
//! Both failure kinds are absorbed here and turned into fixed user-facing
//! strings, so callers never need to branch on errors.

use tracing::error;

use crate::error::LookupError;
use crate::format;
use crate::model::WeatherQuery;
use crate::provider::WeatherProvider;

/// Fetch current weather for `city` and render the result as message text.
///
/// An upstream rejection (unknown city) becomes a retry prompt; any other
/// failure is logged once and becomes a generic apology. This function never
/// returns an error.
pub async fn lookup(provider: &dyn WeatherProvider, city: &str) -> String {
    let query = WeatherQuery::new(city);

    match provider.current_weather(&query).await {
        Ok(report) => format::render_report(city, &report),
        Err(LookupError::UnknownCity { .. }) => format::city_not_found(city),
        Err(LookupError::Upstream(source)) => {
            error!(city, error = %format!("{source:#}"), "weather lookup failed");
            format::GENERIC_ERROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherReport;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use reqwest::StatusCode;

    /// Returns a canned outcome regardless of the queried city.
    #[derive(Debug)]
    enum StubProvider {
        Report(WeatherReport),
        NotFound,
        Broken,
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current_weather(
            &self,
            _query: &WeatherQuery,
        ) -> Result<WeatherReport, LookupError> {
            match self {
                StubProvider::Report(report) => Ok(report.clone()),
                StubProvider::NotFound => Err(LookupError::UnknownCity {
                    status: StatusCode::NOT_FOUND,
                }),
                StubProvider::Broken => {
                    Err(LookupError::Upstream(anyhow!("connection reset by peer")))
                }
            }
        }
    }

    #[tokio::test]
    async fn success_renders_full_report() {
        let provider = StubProvider::Report(WeatherReport {
            description: Some("clear sky".to_string()),
            temperature_c: Some(18.0),
            feels_like_c: Some(17.0),
            humidity_pct: Some(40),
            wind_speed_mps: Some(3.0),
        });

        let text = lookup(&provider, "paris").await;

        assert!(text.starts_with("Погода в городе Paris:"));
        assert!(text.contains("18°C"));
        assert!(text.contains("17°C"));
        assert!(text.contains("3 м/с"));
        assert!(text.contains("40%"));
        assert!(text.contains("Clear sky"));
    }

    #[tokio::test]
    async fn unknown_city_yields_retry_prompt() {
        let text = lookup(&StubProvider::NotFound, "not-a-real-city").await;
        assert_eq!(
            text,
            "Не удалось найти город 'not-a-real-city'. Попробуйте еще раз."
        );
    }

    #[tokio::test]
    async fn upstream_failure_yields_generic_message() {
        let text = lookup(&StubProvider::Broken, "paris").await;
        assert_eq!(text, format::GENERIC_ERROR);
    }

    #[tokio::test]
    async fn empty_input_is_forwarded_like_any_city() {
        // Empty text is not special-cased; the upstream rejects it and the
        // user sees the usual retry prompt.
        let text = lookup(&StubProvider::NotFound, "").await;
        assert_eq!(text, "Не удалось найти город ''. Попробуйте еще раз.");
    }
}
