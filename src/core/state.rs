//! # Application State
//!
//! Core business state for koob. Domain logic only; the form buffers,
//! focus and scroll offsets live in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn VolumeSource>  // catalog client
//! ├── screen: Screen                 // Searching | Loading | Results
//! ├── criteria: SearchCriteria       // what the last search asked for
//! ├── books: Vec<Book>               // result set of the last search
//! ├── status_message: String         // status line text
//! ├── max_results: u32               // maxResults sent to the catalog
//! └── display_delay: Duration        // pause before revealing results
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::VolumeSource;
use crate::core::book::{Book, SearchCriteria};
use crate::core::config::{DEFAULT_DISPLAY_DELAY_MS, ResolvedConfig};
use crate::core::query::MAX_RESULTS;

/// Which screen the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Search form is editable.
    #[default]
    Searching,
    /// A search is in flight; the form is locked behind the loading overlay.
    Loading,
    /// The result list (possibly empty) is shown.
    Results,
}

pub struct App {
    pub source: Arc<dyn VolumeSource>,
    pub screen: Screen,
    pub criteria: SearchCriteria,
    pub books: Vec<Book>,
    pub status_message: String,
    pub max_results: u32,
    pub display_delay: Duration,
}

impl App {
    pub fn new(source: Arc<dyn VolumeSource>) -> Self {
        Self {
            source,
            screen: Screen::default(),
            criteria: SearchCriteria::default(),
            books: Vec::new(),
            status_message: String::from("Type a title, author or genre"),
            max_results: MAX_RESULTS,
            display_delay: Duration::from_millis(DEFAULT_DISPLAY_DELAY_MS),
        }
    }

    pub fn from_config(source: Arc<dyn VolumeSource>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(source);
        app.max_results = config.max_results;
        app.display_delay = config.display_delay;
        app
    }

    pub fn is_loading(&self) -> bool {
        self.screen == Screen::Loading
    }

    /// The "No books found." state: a search with input came back empty.
    /// Searching with every field blank and getting nothing shows a bare list.
    pub fn shows_no_results(&self) -> bool {
        self.screen == Screen::Results && self.books.is_empty() && self.criteria.has_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Searching);
        assert!(!app.is_loading());
        assert!(app.books.is_empty());
        assert_eq!(app.max_results, MAX_RESULTS);
        assert_eq!(app.display_delay, Duration::from_millis(DEFAULT_DISPLAY_DELAY_MS));
    }

    #[test]
    fn test_no_results_requires_results_screen_and_input() {
        let mut app = test_app();
        app.criteria = SearchCriteria::new("dune", "", "");
        assert!(!app.shows_no_results());

        app.screen = Screen::Results;
        assert!(app.shows_no_results());

        app.criteria = SearchCriteria::default();
        assert!(!app.shows_no_results());
    }
}
