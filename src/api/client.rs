//! PokeAPI Client
//!
//! Cache-aware HTTP client for the PokeAPI. Every lookup runs the same
//! orchestration: consult the cache under the full request URL; on a miss,
//! fetch over HTTP and unconditionally store the raw bytes before any
//! parsing is attempted, then decode. Transport errors propagate to the
//! caller untouched and are never cached.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::api::models::{LocationArea, Pokemon, ResourcePage};
use crate::cache::Cache;
use crate::error::Result;

// == Fetch Trait ==
/// The transport seam: one blocking-until-done byte fetch per URL.
///
/// Production uses [`HttpFetch`]; tests substitute canned payloads.
pub trait Fetch {
    /// Retrieves the body at `url`, erring on transport failure or a
    /// non-success status.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

// == HTTP Fetcher ==
/// [`Fetch`] implementation over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    /// Builds the fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let request = self.client.get(url);
        async move {
            let response = request.send().await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
    }
}

// == PokeAPI Client ==
/// Typed access to the PokeAPI endpoints the REPL uses, backed by the
/// expiring cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient<F = HttpFetch> {
    fetcher: F,
    cache: Cache,
    base_url: String,
}

impl<F: Fetch> PokeApiClient<F> {
    /// Creates a client over `fetcher` and `cache`, rooted at `base_url`.
    pub fn new(fetcher: F, cache: Cache, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            fetcher,
            cache,
            base_url,
        }
    }

    /// The cache this client populates.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of one page of the location-area listing.
    pub fn location_area_page_url(&self, offset: usize, limit: usize) -> String {
        format!(
            "{}/location-area/?offset={}&limit={}",
            self.base_url, offset, limit
        )
    }

    /// Fetches one page of the location-area listing.
    pub async fn location_area_page(&self, offset: usize, limit: usize) -> Result<ResourcePage> {
        let url = self.location_area_page_url(offset, limit);
        let bytes = self.fetch_cached(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches a single location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        let bytes = self.fetch_cached(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetches a single pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let bytes = self.fetch_cached(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The shared orchestration: cache lookup, then fetch-and-store on a miss.
    ///
    /// The store happens before the caller gets a chance to parse, so even a
    /// payload that later turns out to be malformed is cached; the next
    /// request for the same URL skips the network and fails the same way.
    async fn fetch_cached(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(bytes) = self.cache.get(url).await {
            debug!("cache hit for {url}");
            return Ok(bytes);
        }

        debug!("cache miss for {url}");
        let bytes = self.fetcher.fetch(url).await?;
        self.cache.put(url, bytes.clone()).await;
        Ok(bytes)
    }
}
