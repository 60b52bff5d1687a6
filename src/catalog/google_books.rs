//! Google Books volumes endpoint.
//!
//! A search is one unauthenticated GET of `<base_url>?q=...&maxResults=...`.
//! The body is a JSON object with an optional `items` array.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::catalog::{FetchError, RawVolume, VolumeSource, VolumesResponse};
use crate::core::query::search_url;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";

pub struct GoogleBooksSource {
    base_url: String,
    client: reqwest::Client,
}

impl GoogleBooksSource {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl VolumeSource for GoogleBooksSource {
    fn name(&self) -> &str {
        "google-books"
    }

    async fn fetch_volumes(&self, query: &str) -> Result<Vec<RawVolume>, FetchError> {
        let url = search_url(&self.base_url, query);
        info!("Catalog request: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        debug!("Catalog body: {} bytes", body.len());

        let parsed: VolumesResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        let items = parsed.items.ok_or(FetchError::MissingItems)?;
        info!("Catalog returned {} volumes", items.len());
        Ok(items)
    }
}
