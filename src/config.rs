//! Configuration Module
//!
//! Handles loading and managing CLI configuration from environment variables.

use std::env;

/// Default PokeAPI root, including the versioned path segment.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// CLI configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the PokeAPI server (no trailing slash)
    pub api_base_url: String,
    /// Cache expiry interval in seconds; also the reaper's polling period
    pub cache_ttl_secs: u64,
    /// Upper bound (exclusive) of the catch roll compared against base experience
    pub catch_difficulty: u32,
    /// Number of location areas fetched per `map` page
    pub page_limit: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root URL (default: `https://pokeapi.co/api/v2`)
    /// - `CACHE_TTL_SECS` - Cache expiry/reap interval in seconds (default: 20)
    /// - `CATCH_DIFFICULTY` - Catch roll upper bound (default: 400)
    /// - `PAGE_LIMIT` - Location areas per map page (default: 20)
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            catch_difficulty: env::var("CATCH_DIFFICULTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(400),
            page_limit: env::var("PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
        }
    }

    /// Returns the first `map` page URL for this configuration.
    pub fn initial_map_url(&self) -> String {
        format!(
            "{}/location-area/?offset=0&limit={}",
            self.api_base_url, self.page_limit
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_ttl_secs: 20,
            catch_difficulty: 400,
            page_limit: 20,
        }
    }
}
