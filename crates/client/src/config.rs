//! # Client Configuration
//!
//! Settings for reaching the GoBarber API, read from the environment:
//!
//! - `GOBARBER_API_URL`: base URL of the service (required)
//! - `GOBARBER_API_TOKEN`: bearer token of the signed-in user (optional)
//! - `GOBARBER_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)

use eyre::{eyre, Result, WrapErr};
use reqwest::Url;
use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL such as `http://localhost:3333`
    pub api_url: String,

    /// Bearer token sent on every request when present
    pub api_token: Option<String>,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_token: None,
            request_timeout: 30,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Load the client configuration from environment variables
    ///
    /// # Errors
    ///
    /// Fails when `GOBARBER_API_URL` is not set.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("GOBARBER_API_URL")
            .wrap_err("GOBARBER_API_URL environment variable must be set")?;

        let api_token = env::var("GOBARBER_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let request_timeout = env::var("GOBARBER_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            api_url,
            api_token,
            request_timeout,
        })
    }

    /// Join a resource path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build a resource URL from path segments. Each segment is
    /// percent-encoded, so ids cannot alter the path or the query.
    pub fn resource_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.api_url)
            .wrap_err_with(|| format!("Invalid API URL {}", self.api_url))?;

        url.path_segments_mut()
            .map_err(|_| eyre!("API URL {} cannot take a path", self.api_url))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}
