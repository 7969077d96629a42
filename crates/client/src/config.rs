//! # Client Configuration Module
//!
//! Loads the settings the booking desk needs to reach the backend.
//!
//! ## Environment Variables
//!
//! - `BOOKING_API_URL`: Base URL of the backend API (default: "http://localhost:8080/api")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `BOOKING_REQUEST_TIMEOUT_SECONDS`: Per-request timeout; unset means the transport default

use eyre::{Result, WrapErr};
use std::env;
use std::time::Duration;
use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Configuration for the booking API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to, without a trailing slash
    pub api_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// Optional request timeout in seconds
    pub request_timeout: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: Level::INFO,
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `BOOKING_REQUEST_TIMEOUT_SECONDS` is set but is not
    /// a valid number of seconds.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("BOOKING_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        let request_timeout = match env::var("BOOKING_REQUEST_TIMEOUT_SECONDS") {
            Ok(raw) => Some(
                raw.trim()
                    .parse()
                    .wrap_err("Invalid BOOKING_REQUEST_TIMEOUT_SECONDS value")?,
            ),
            Err(_) => None,
        };

        Ok(Self::new(api_url, log_level, request_timeout))
    }

    pub fn new(api_url: impl Into<String>, log_level: Level, request_timeout: Option<u64>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            api_url,
            log_level,
            request_timeout,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }

    /// Joins an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
