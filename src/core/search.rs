//! # Search Executor
//!
//! Runs one search end to end against a `VolumeSource`:
//!
//! ```text
//! criteria ─► build_query ─► fetch_volumes ─► normalize ─► filter::apply
//! ```
//!
//! [`run`] wraps that in the reveal rules: a successful search is held back
//! for the display delay, a failed one is reported immediately.

use std::time::Duration;

use log::{info, warn};

use crate::catalog::{FetchError, VolumeSource};
use crate::core::action::Action;
use crate::core::book::{Book, SearchCriteria};
use crate::core::{filter, normalize, query};

/// Fetches and filters. Any error discards the whole batch.
pub async fn execute(
    source: &dyn VolumeSource,
    criteria: &SearchCriteria,
    max_results: u32,
) -> Result<Vec<Book>, FetchError> {
    let query = query::build_query(criteria, max_results);
    let volumes = source.fetch_volumes(&query).await?;
    let fetched = volumes.len();
    let books = filter::apply(normalize::normalize(volumes), criteria);
    info!(
        "Search via {}: {} fetched, {} after filtering",
        source.name(),
        fetched,
        books.len()
    );
    Ok(books)
}

/// Produces the action that ends a search.
pub async fn run(
    source: &dyn VolumeSource,
    criteria: &SearchCriteria,
    max_results: u32,
    display_delay: Duration,
) -> Action {
    match execute(source, criteria, max_results).await {
        Ok(books) => {
            tokio::time::sleep(display_delay).await;
            Action::SearchCompleted(books)
        }
        Err(e) => {
            warn!("Error fetching books: {}", e);
            Action::SearchFailed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::MAX_RESULTS;
    use crate::test_support::{StubSource, dune_volumes};
    use std::time::Instant;

    #[tokio::test]
    async fn test_execute_sends_built_query() {
        let source = StubSource::with_volumes(dune_volumes());
        let criteria = SearchCriteria::new("dune", "", "");
        execute(&source, &criteria, MAX_RESULTS).await.unwrap();
        assert_eq!(
            source.last_query().as_deref(),
            Some("q=intitle:dune++&maxResults=40")
        );
    }

    #[tokio::test]
    async fn test_execute_title_dedupe() {
        let source = StubSource::with_volumes(dune_volumes());
        let books = execute(&source, &SearchCriteria::new("dune", "", ""), MAX_RESULTS)
            .await
            .unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "1");
    }

    #[tokio::test]
    async fn test_execute_author_refilters() {
        let source = StubSource::with_volumes(dune_volumes());
        let books = execute(&source, &SearchCriteria::new("", "Other", ""), MAX_RESULTS)
            .await
            .unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "2");
    }

    #[tokio::test]
    async fn test_execute_propagates_failure() {
        let source = StubSource::failing(FetchError::MissingItems);
        let result = execute(&source, &SearchCriteria::new("dune", "", ""), MAX_RESULTS).await;
        assert_eq!(result, Err(FetchError::MissingItems));
    }

    #[tokio::test]
    async fn test_run_success_waits_for_delay() {
        let source = StubSource::with_volumes(dune_volumes());
        let delay = Duration::from_millis(50);
        let started = Instant::now();
        let action = run(&source, &SearchCriteria::new("dune", "", ""), MAX_RESULTS, delay).await;
        assert!(started.elapsed() >= delay);
        match action {
            Action::SearchCompleted(books) => assert_eq!(books.len(), 1),
            other => panic!("expected SearchCompleted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_failure_skips_delay() {
        let source = StubSource::failing(FetchError::Network("connection refused".into()));
        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            run(
                &source,
                &SearchCriteria::new("dune", "", ""),
                MAX_RESULTS,
                Duration::from_secs(3600),
            ),
        )
        .await
        .expect("failure must not wait for the display delay");
        assert_eq!(
            outcome,
            Action::SearchFailed("network error: connection refused".into())
        );
    }

    #[tokio::test]
    async fn test_run_zero_matches_completes_empty() {
        let source = StubSource::with_volumes(dune_volumes());
        let action = run(
            &source,
            &SearchCriteria::new("", "Nobody", ""),
            MAX_RESULTS,
            Duration::ZERO,
        )
        .await;
        assert_eq!(action, Action::SearchCompleted(Vec::new()));
    }
}
