//! # App Configuration
//!
//! Everything the app needs at startup, read from the environment:
//!
//! - `GOBARBER_API_URL`, `GOBARBER_API_TOKEN`,
//!   `GOBARBER_REQUEST_TIMEOUT_SECONDS`: see [`ClientConfig`]
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `GOBARBER_PLATFORM`: "android" or "ios" (default: "android")

use eyre::{eyre, Result};
use gobarber_client::config::ClientConfig;
use std::env;
use tracing::Level;

use crate::screens::create_appointment::Platform;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// How to reach the GoBarber API
    pub client: ClientConfig,

    /// Log level for the application
    pub log_level: Level,

    /// Platform the screens behave like
    pub platform: Platform,
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The GOBARBER_API_URL environment variable is not set
    /// - GOBARBER_PLATFORM names an unknown platform
    pub fn from_env() -> Result<Self> {
        let client = ClientConfig::from_env()?;

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        let platform = match env::var("GOBARBER_PLATFORM") {
            Ok(value) => Platform::parse(&value)
                .ok_or_else(|| eyre!("Unknown GOBARBER_PLATFORM value: {}", value))?,
            Err(_) => Platform::Android,
        };

        Ok(Self {
            client,
            log_level,
            platform,
        })
    }
}

pub fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
