use anyhow::{Context, Result};
use std::env;

/// Credentials for both external services, read from the environment.
///
/// The binary is expected to call `dotenvy::dotenv()` before [`Config::from_env`]
/// so a local `.env` file can supply these variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token (`TELEGRAM_TOKEN`).
    pub telegram_token: String,

    /// OpenWeather API key (`OPENWEATHER_API_KEY`).
    pub openweather_api_key: String,
}

impl Config {
    /// Load both credentials from the environment; missing variables are a
    /// startup error, not something the bot recovers from.
    pub fn from_env() -> Result<Self> {
        let telegram_token = env::var("TELEGRAM_TOKEN")
            .context("TELEGRAM_TOKEN is not set.\nHint: export it or add it to a .env file.")?;

        let openweather_api_key = env::var("OPENWEATHER_API_KEY").context(
            "OPENWEATHER_API_KEY is not set.\nHint: export it or add it to a .env file.",
        )?;

        Ok(Self {
            telegram_token,
            openweather_api_key,
        })
    }
}
