//! Binary crate for the weather Telegram bot.
//!
//! This crate focuses on:
//! - Process startup (logging, `.env`, credentials)
//! - Wiring the provider into the teloxide dispatcher

use std::sync::Arc;

use anyhow::Result;
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::EnvFilter;
use weather_core::{Config, OpenWeatherProvider, WeatherProvider};

mod bot;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting weather bot");

    let tg_bot = Bot::new(&config.telegram_token);
    let provider: Arc<dyn WeatherProvider> =
        Arc::new(OpenWeatherProvider::new(config.openweather_api_key));

    bot::run(tg_bot, provider).await;

    Ok(())
}
