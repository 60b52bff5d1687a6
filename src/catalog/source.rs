use std::fmt;

use async_trait::async_trait;

use super::types::RawVolume;

/// Errors that can occur while fetching volumes from the catalog.
/// Every variant ends the search with an empty result set; none are retried.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, body read aborted).
    Network(String),
    /// The catalog answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the JSON shape we expect.
    Parse(String),
    /// The body decoded but carried no `items` list.
    MissingItems,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::MissingItems => write!(f, "response contained no item list"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait VolumeSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Runs one search with an already-built query string (`q=...&maxResults=...`)
    /// and returns the raw volumes in the order the catalog listed them.
    async fn fetch_volumes(&self, query: &str) -> Result<Vec<RawVolume>, FetchError>;
}
