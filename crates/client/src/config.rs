//! # Client Configuration
//!
//! Loads the booking client's settings from environment variables. Every
//! variable has a default, so a bare environment yields a configuration
//! pointed at a local API.
//!
//! ## Environment Variables
//!
//! - `APPOINTLY_API_URL`: Base URL of the appointments API (default: "http://127.0.0.1:8000/api/")
//! - `BUSINESS_HOURS_START`: First bookable hour, 0-23 (default: 9)
//! - `BUSINESS_HOURS_END`: Hour bookings stop, exclusive (default: 17)
//! - `SLOT_INTERVAL_MINUTES`: Step between listed slots (default: 30)
//! - `DISPLAY_DATE_FORMAT`: One of "MM-DD-YYYY", "MM/DD/YYYY", "YYYY-MM-DD" (default: "MM-DD-YYYY")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: HTTP request timeout (default: 30)

use std::{env, time::Duration};

use appointly_core::{BusinessHours, DisplayDateFormat, SlotInterval};
use eyre::{Result, WrapErr, eyre};
use tracing::Level;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/";

/// Configuration for the booking client
///
/// # Example
///
/// ```no_run
/// use appointly_client::config::ClientConfig;
///
/// fn example() -> eyre::Result<()> {
///     let config = ClientConfig::load()?;
///     println!("Booking against {}", config.api_base_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the appointments API, always ending in `/`
    pub api_base_url: String,

    /// Daily window bookings must start in
    pub business_hours: BusinessHours,

    /// Step between listed slots
    pub slot_interval: SlotInterval,

    /// Format dates are shown to users in
    pub display_date_format: DisplayDateFormat,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ClientConfig {
    /// Reads `.env` if present, then loads from the process environment.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - A numeric variable cannot be parsed
    /// - The business hours or slot interval are out of range
    /// - DISPLAY_DATE_FORMAT names an unknown format
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // API settings
        let mut api_base_url = var("APPOINTLY_API_URL", DEFAULT_API_URL);
        if !api_base_url.ends_with('/') {
            api_base_url.push('/');
        }

        // Scheduling rules
        let start = var("BUSINESS_HOURS_START", "9")
            .parse()
            .wrap_err("Invalid BUSINESS_HOURS_START value")?;
        let end = var("BUSINESS_HOURS_END", "17")
            .parse()
            .wrap_err("Invalid BUSINESS_HOURS_END value")?;
        let business_hours =
            BusinessHours::new(start, end).wrap_err("Invalid business hours configuration")?;

        let interval = var("SLOT_INTERVAL_MINUTES", "30")
            .parse()
            .wrap_err("Invalid SLOT_INTERVAL_MINUTES value")?;
        let slot_interval = SlotInterval::new(interval).wrap_err("Invalid slot interval")?;

        let pattern = var("DISPLAY_DATE_FORMAT", DisplayDateFormat::default().pattern());
        let display_date_format = DisplayDateFormat::from_pattern(&pattern)
            .ok_or_else(|| eyre!("Unknown DISPLAY_DATE_FORMAT: {}", pattern))?;

        // Logging settings
        let log_level = parse_log_level(&var("LOG_LEVEL", "info"));

        // Performance settings
        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS", "30")
            .parse()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        Ok(Self {
            api_base_url,
            business_hours,
            slot_interval,
            display_date_format,
            log_level,
            request_timeout,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

fn parse_log_level(level: &str) -> Level {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
