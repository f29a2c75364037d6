//! Core library for the weather Telegram bot.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - The `lookup` operation: city name in, chat-ready report text out
//!
//! It is used by `weather-bot`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::LookupError;
pub use lookup::lookup;
pub use model::{WeatherQuery, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
