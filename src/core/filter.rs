//! # Result Filter Pipeline
//!
//! Three stages, each gated on its criterion being non-empty:
//!
//! ```text
//! normalized ──► title dedupe ──► working
//! normalized ──► author match ──► working   (replaces, does not narrow)
//! working    ──► genre match  ──► working
//! ```
//!
//! The author stage reads the normalized list, not the title stage's output,
//! so a title+author search can return duplicate titles. Keep it that way:
//! it is the observable behavior users already get.

use std::collections::HashSet;

use log::debug;

use crate::core::book::{Book, SearchCriteria};

/// Keeps the first book for each distinct case-insensitive title.
pub fn dedupe_titles(books: &[Book]) -> Vec<Book> {
    let mut seen = HashSet::new();
    books
        .iter()
        .filter(|book| seen.insert(book.title.to_lowercase()))
        .cloned()
        .collect()
}

/// Keeps books with an author equal to `author`, ignoring case.
pub fn match_author(books: &[Book], author: &str) -> Vec<Book> {
    let wanted = author.to_lowercase();
    books
        .iter()
        .filter(|book| book.authors.iter().any(|a| a.to_lowercase() == wanted))
        .cloned()
        .collect()
}

/// Keeps books with a genre containing `genre`, ignoring case.
pub fn match_genre(books: &[Book], genre: &str) -> Vec<Book> {
    let wanted = genre.to_lowercase();
    books
        .iter()
        .filter(|book| book.genres.iter().any(|g| g.to_lowercase().contains(&wanted)))
        .cloned()
        .collect()
}

/// Runs the pipeline over a freshly normalized batch.
pub fn apply(normalized: Vec<Book>, criteria: &SearchCriteria) -> Vec<Book> {
    let mut working = normalized.clone();

    if !criteria.title.is_empty() {
        working = dedupe_titles(&working);
        debug!("Title stage: {} -> {}", normalized.len(), working.len());
    }

    if !criteria.author.is_empty() {
        working = match_author(&normalized, &criteria.author);
        debug!("Author stage: {} -> {}", normalized.len(), working.len());
    }

    if !criteria.genre.is_empty() {
        let before = working.len();
        working = match_genre(&working, &criteria.genre);
        debug!("Genre stage: {} -> {}", before, working.len());
    }

    working
}
