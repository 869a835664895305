//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The value is constructed once and handed to the fetcher at construction time;
/// it is never read from shared mutable state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL prepended to every request path
    pub base_path: String,
    /// Per-attempt timeout in milliseconds
    pub timeout_ms: u64,
    /// Number of attempts per request, always >= 1
    pub retry_count: u32,
    /// Whether responses are cached and served from cache
    pub cache_enabled: bool,
    /// TTL in seconds applied to cached responses
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `BASE_PATH` - Base URL for requests (default: "http://localhost:3000/api")
    /// - `REQUEST_TIMEOUT_MS` - Per-attempt timeout in ms (default: 2000)
    /// - `RETRY_COUNT` - Attempts per request, clamped to >= 1 (default: 3)
    /// - `CACHE_ENABLED` - Enable the response cache (default: true)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            base_path: env::var("BASE_PATH")
                .unwrap_or_else(|_| "http://localhost:3000/api".to_string()),
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
            retry_count: env::var("RETRY_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3u32)
                .max(1),
            cache_enabled: env::var("CACHE_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            cache_ttl_secs: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Per-attempt timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: "http://localhost:3000/api".to_string(),
            timeout_ms: 2000,
            retry_count: 3,
            cache_enabled: true,
            cache_ttl_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_path, "http://localhost:3000/api");
        assert_eq!(config.timeout_ms, 2000);
        assert_eq!(config.retry_count, 3);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl_secs, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("BASE_PATH");
        env::remove_var("REQUEST_TIMEOUT_MS");
        env::remove_var("RETRY_COUNT");
        env::remove_var("CACHE_ENABLED");
        env::remove_var("CACHE_TTL");

        let config = Config::from_env();
        assert_eq!(config.base_path, "http://localhost:3000/api");
        assert_eq!(config.timeout_ms, 2000);
        assert_eq!(config.retry_count, 3);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl_secs, 60);
    }

    #[test]
    fn test_config_retry_count_clamped() {
        env::set_var("RETRY_COUNT", "0");
        let config = Config::from_env();
        assert_eq!(config.retry_count, 1);
        env::remove_var("RETRY_COUNT");
    }

    #[test]
    fn test_config_durations() {
        let config = Config::default();
        assert_eq!(config.timeout(), Duration::from_millis(2000));
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }
}
