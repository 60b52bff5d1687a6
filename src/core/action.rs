//! # Actions
//!
//! Everything that can happen in koob becomes an `Action`.
//! User presses Enter on the form? That's `Action::Submit(criteria)`.
//! The catalog answers? That's `Action::SearchCompleted(books)`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! adapter must carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ```text
//! Searching ──Submit──► Loading ──SearchCompleted/SearchFailed──► Results
//!     ▲                                                              │
//!     └──────────────────────────── Back ────────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::core::book::{Book, SearchCriteria};
use crate::core::state::{App, Screen};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start a search with the given form contents.
    Submit(SearchCriteria),
    /// The search task finished and the display delay has elapsed.
    SearchCompleted(Vec<Book>),
    /// The search task failed; carries the error text for the log.
    SearchFailed(String),
    /// Leave the results screen and clear the form.
    Back,
    Quit,
}

/// What the adapter has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the background search for `app.criteria`.
    SpawnSearch,
    /// Clear the form fields.
    ResetForm,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(criteria) => {
            if app.screen != Screen::Searching {
                warn!("Ignoring search submitted while on {:?}", app.screen);
                return Effect::None;
            }
            info!("Search submitted: {:?}", criteria);
            app.criteria = criteria;
            app.books.clear();
            app.screen = Screen::Loading;
            app.status_message = String::from("Searching...");
            Effect::SpawnSearch
        }
        Action::SearchCompleted(books) => {
            if app.screen != Screen::Loading {
                warn!("Dropping search result that arrived on {:?}", app.screen);
                return Effect::None;
            }
            info!("Search completed with {} books", books.len());
            app.status_message = match books.len() {
                1 => String::from("1 book"),
                n => format!("{n} books"),
            };
            app.books = books;
            app.screen = Screen::Results;
            Effect::None
        }
        Action::SearchFailed(error) => {
            if app.screen != Screen::Loading {
                warn!("Dropping search failure that arrived on {:?}", app.screen);
                return Effect::None;
            }
            debug!("Search failed: {}", error);
            app.books.clear();
            app.screen = Screen::Results;
            app.status_message = String::from("0 books");
            Effect::None
        }
        Action::Back => {
            if app.screen != Screen::Results {
                return Effect::None;
            }
            app.criteria = SearchCriteria::default();
            app.books.clear();
            app.screen = Screen::Searching;
            app.status_message = String::from("Type a title, author or genre");
            Effect::ResetForm
        }
        Action::Quit => Effect::Quit,
    }
}
