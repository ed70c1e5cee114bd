//! Configuration Module
//!
//! Handles loading CLI configuration from environment variables.

use std::env;
use std::time::Duration;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Freshness window and reaper period for the response cache
    pub cache_interval: Duration,
    /// Number of resources per pagination page
    pub page_size: usize,
    /// Base URL of the PokeAPI
    pub api_base_url: String,
    /// Timeout applied to every outgoing HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL` - Cache freshness window in seconds (default: 5)
    /// - `PAGE_SIZE` - Resources per page (default: 20)
    /// - `API_BASE_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `REQUEST_TIMEOUT` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_interval),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_size),
            api_base_url: env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: Duration::from_secs(5),
            page_size: 20,
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}
