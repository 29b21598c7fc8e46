//! Image lookup — memoizing front for an external photo-search provider.
//!
//! One `ImageLookupCache` is built at startup and shared through `AppState`.
//! The first lookup for a category goes to the provider; the returned pool is
//! kept for the life of the process and later lookups pick from it at random.
//! Provider failures degrade to `FALLBACK_IMAGE_URL` and are never cached.

pub mod unsplash;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

pub use unsplash::UnsplashSearch;

/// Returned whenever the provider cannot supply an image.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1557683316-973673baf926?auto=format&fit=crop&w=1600&q=80";

/// Upper bound on the pool kept per category.
pub const MAX_POOL_SIZE: usize = 15;

#[derive(Debug, Error)]
pub enum ImageSearchError {
    #[error("image search credential is not configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },

    #[error("Malformed search response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No results for query '{0}'")]
    Empty(String),
}

/// Photo-search provider. Implement this to swap providers without touching the cache.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Returns image URLs matching `query`, best first.
    async fn search(&self, query: &str) -> Result<Vec<String>, ImageSearchError>;
}

/// Search query sent to the provider for a category.
pub fn category_query(category: &str) -> String {
    format!("{category} industry")
}

pub struct ImageLookupCache {
    search: Arc<dyn ImageSearch>,
    pools: RwLock<HashMap<String, Vec<String>>>,
}

impl ImageLookupCache {
    pub fn new(search: Arc<dyn ImageSearch>) -> Self {
        Self {
            search,
            pools: RwLock::new(HashMap::new()),
        }
    }

    /// Returns an image URL for `category`. Never fails.
    ///
    /// The map lock is released before the provider call, so concurrent misses
    /// for the same category may both search; the last pool written wins.
    pub async fn get_image(&self, category: &str) -> String {
        if let Some(url) = self.pick_cached(category).await {
            return url;
        }

        let query = category_query(category);
        let mut urls = match self.search.search(&query).await {
            Ok(urls) => urls,
            Err(e) => {
                warn!("Image search failed for '{category}': {e}");
                return FALLBACK_IMAGE_URL.to_string();
            }
        };
        urls.truncate(MAX_POOL_SIZE);

        let Some(choice) = choose_url(&urls) else {
            warn!("Image search returned no results for '{category}'");
            return FALLBACK_IMAGE_URL.to_string();
        };

        debug!("Caching {} images for '{category}'", urls.len());
        self.pools.write().await.insert(category.to_string(), urls);
        choice
    }

    /// Number of URLs pooled for `category` (0 when not cached).
    #[cfg(test)]
    pub async fn cached_len(&self, category: &str) -> usize {
        self.pools
            .read()
            .await
            .get(category)
            .map(Vec::len)
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub async fn clear(&self) {
        self.pools.write().await.clear();
    }

    async fn pick_cached(&self, category: &str) -> Option<String> {
        let pools = self.pools.read().await;
        pools.get(category).and_then(|urls| choose_url(urls))
    }
}

/// Uniform pick. Kept synchronous so the thread-local RNG never lives across an await.
fn choose_url(urls: &[String]) -> Option<String> {
    urls.choose(&mut rand::thread_rng()).cloned()
}
