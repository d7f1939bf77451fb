//! Caching HTTP Client
//!
//! Wraps a reqwest client around the TTL cache. Responses are cached under
//! their full request URL; a hit is trusted unconditionally, with staleness
//! bounded by the cache's reap interval.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Request timeout applied to every API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// == Poke Client ==
/// HTTP client for the PokeAPI with a response cache.
///
/// Owns its [`Cache`] outright, so independent clients (e.g. in tests) get
/// independent caches with their own intervals and reaper tasks.
#[derive(Debug)]
pub struct PokeClient {
    /// Underlying HTTP client
    http: Client,
    /// Response cache keyed by request URL
    cache: Cache,
    /// API root, no trailing slash
    base_url: String,
}

impl PokeClient {
    // == Constructor ==
    /// Creates a client with a fresh cache using the configured interval.
    pub fn new(config: &Config) -> Result<Self> {
        let cache = Cache::new(Duration::from_secs(config.cache_ttl_secs))?;
        Self::with_cache(config, cache)
    }

    /// Creates a client around an existing cache handle.
    pub fn with_cache(config: &Config, cache: Cache) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.api_base_url.clone(),
        })
    }

    // == Cached Get ==
    /// Returns the body for `url`, serving from cache when possible.
    ///
    /// A miss fetches over the network and stores the body before returning
    /// it. A hit is returned as-is, even if older than the cache interval.
    pub async fn get_cached(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            return Ok(body);
        }

        let body = self.fetch(url).await?;
        self.cache.add(url.to_string(), body.clone()).await;
        Ok(body)
    }

    // == Fresh Get ==
    /// Fetches `url` over the network unconditionally.
    ///
    /// Still stores the body, so later cached reads of the same URL hit.
    /// Used by `catch`, which re-rolls against live data every attempt.
    pub async fn get_fresh(&self, url: &str) -> Result<Vec<u8>> {
        let body = self.fetch(url).await?;
        self.cache.add(url.to_string(), body.clone()).await;
        Ok(body)
    }

    // == Typed Endpoints ==
    /// Fetches one page of the location-area listing.
    pub async fn location_page(&self, url: &str) -> Result<LocationAreaPage> {
        let body = self.get_cached(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches the encounter detail for a named location area.
    pub async fn explore(&self, area: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, area.to_lowercase());
        let body = self.get_cached(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a pokemon by name, bypassing the cache read path.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name.to_lowercase());
        let body = self.get_fresh(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Cache Access ==
    /// Returns the underlying cache handle.
    #[allow(dead_code)]
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == Fetch ==
    /// Performs the actual network request and status validation.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "fetching from network");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.as_u16() > 299 {
            return Err(PokedexError::Status {
                code: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}
