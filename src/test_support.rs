//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::catalog::{FetchError, RawVolume, VolumeInfo, VolumeSource};

/// A canned catalog for tests that don't need real HTTP calls.
/// Records the last query it was asked for.
pub struct StubSource {
    outcome: Result<Vec<RawVolume>, FetchError>,
    last_query: Mutex<Option<String>>,
}

impl StubSource {
    pub fn with_volumes(volumes: Vec<RawVolume>) -> Self {
        Self {
            outcome: Ok(volumes),
            last_query: Mutex::new(None),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            last_query: Mutex::new(None),
        }
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl VolumeSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_volumes(&self, query: &str) -> Result<Vec<RawVolume>, FetchError> {
        *self.last_query.lock().unwrap() = Some(query.to_string());
        self.outcome.clone()
    }
}

pub fn raw_volume(id: &str, title: &str, authors: &[&str], categories: &[&str]) -> RawVolume {
    RawVolume {
        id: id.to_string(),
        volume_info: VolumeInfo {
            title: Some(title.to_string()),
            authors: Some(authors.iter().map(|s| s.to_string()).collect()),
            categories: Some(categories.iter().map(|s| s.to_string()).collect()),
        },
    }
}

/// Two volumes whose titles differ only by case.
pub fn dune_volumes() -> Vec<RawVolume> {
    vec![
        raw_volume("1", "Dune", &["Frank Herbert"], &["Sci-Fi"]),
        raw_volume("2", "dune", &["Other"], &["Fiction"]),
    ]
}

/// Creates a test App backed by an empty StubSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubSource::with_volumes(Vec::new())))
}
