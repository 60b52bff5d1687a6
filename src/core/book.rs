//! # Search Domain Types
//!
//! `SearchCriteria` is what the user typed; `Book` is what we show them.

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_GENRE: &str = "Unknown Genre";

/// The three free-text fields of a search. Any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl SearchCriteria {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }

    /// True if at least one field holds text. Whitespace counts as text.
    pub fn has_any(&self) -> bool {
        !self.title.is_empty() || !self.author.is_empty() || !self.genre.is_empty()
    }
}

/// A normalized catalog entry.
///
/// `authors` and `genres` are never empty: missing data is replaced with
/// [`UNKNOWN_AUTHOR`] / [`UNKNOWN_GENRE`] during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
}

impl Book {
    pub fn authors_label(&self) -> String {
        self.authors.join(", ")
    }

    pub fn genres_label(&self) -> String {
        self.genres.join(", ")
    }
}
