//! Unsplash photo-search provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::images::{ImageSearch, ImageSearchError, MAX_POOL_SIZE};

pub const UNSPLASH_API_URL: &str = "https://api.unsplash.com";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Clone)]
pub struct UnsplashSearch {
    client: Client,
    base_url: String,
    access_key: Option<String>,
}

impl UnsplashSearch {
    /// `timeout` bounds the whole request, connect included.
    pub fn new(access_key: Option<String>, timeout: Duration) -> Result<Self, ImageSearchError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: UNSPLASH_API_URL.to_string(),
            access_key,
        })
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl ImageSearch for UnsplashSearch {
    async fn search(&self, query: &str) -> Result<Vec<String>, ImageSearchError> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(ImageSearchError::MissingCredential)?;

        let per_page = MAX_POOL_SIZE.to_string();
        let response = self
            .client
            .get(format!("{}/search/photos", self.base_url))
            .query(&[
                ("query", query),
                ("client_id", access_key),
                ("orientation", "landscape"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageSearchError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        let urls: Vec<String> = parsed.results.into_iter().map(|p| p.urls.regular).collect();

        if urls.is_empty() {
            return Err(ImageSearchError::Empty(query.to_string()));
        }

        debug!("Unsplash returned {} results for '{query}'", urls.len());
        Ok(urls)
    }
}
