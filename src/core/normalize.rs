//! Maps catalog volumes onto [`Book`].
//!
//! Order is preserved. Missing or empty author/category lists get a single
//! placeholder entry so every `Book` has at least one of each. A missing title
//! becomes the empty string. If the catalog repeats an `id`, only the first
//! record is kept.

use std::collections::HashSet;

use log::debug;

use crate::catalog::RawVolume;
use crate::core::book::{Book, UNKNOWN_AUTHOR, UNKNOWN_GENRE};

fn non_empty_or(list: Option<Vec<String>>, placeholder: &str) -> Vec<String> {
    match list {
        Some(values) if !values.is_empty() => values,
        _ => vec![placeholder.to_string()],
    }
}

/// Converts one raw volume.
pub fn to_book(volume: RawVolume) -> Book {
    let info = volume.volume_info;
    Book {
        id: volume.id,
        title: info.title.unwrap_or_default(),
        authors: non_empty_or(info.authors, UNKNOWN_AUTHOR),
        genres: non_empty_or(info.categories, UNKNOWN_GENRE),
    }
}

/// Converts a fetched batch, dropping repeated ids.
pub fn normalize(volumes: Vec<RawVolume>) -> Vec<Book> {
    let mut seen = HashSet::new();
    volumes
        .into_iter()
        .filter(|volume| {
            let fresh = seen.insert(volume.id.clone());
            if !fresh {
                debug!("Dropping repeated volume id {}", volume.id);
            }
            fresh
        })
        .map(to_book)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VolumeInfo;

    fn volume(
        id: &str,
        title: Option<&str>,
        authors: Option<&[&str]>,
        categories: Option<&[&str]>,
    ) -> RawVolume {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        RawVolume {
            id: id.to_string(),
            volume_info: VolumeInfo {
                title: title.map(str::to_string),
                authors: authors.map(owned),
                categories: categories.map(owned),
            },
        }
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let book = to_book(volume(
            "abc",
            Some("Dune"),
            Some(&["Frank Herbert"]),
            Some(&["Science Fiction", "Classics"]),
        ));
        assert_eq!(book.id, "abc");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.authors, vec!["Frank Herbert"]);
        assert_eq!(book.genres, vec!["Science Fiction", "Classics"]);
    }

    #[test]
    fn test_missing_lists_get_placeholders() {
        let book = to_book(volume("abc", Some("Untitled"), None, None));
        assert_eq!(book.authors, vec![UNKNOWN_AUTHOR]);
        assert_eq!(book.genres, vec![UNKNOWN_GENRE]);
    }

    #[test]
    fn test_empty_lists_get_placeholders() {
        let book = to_book(volume("abc", Some("Untitled"), Some(&[]), Some(&[])));
        assert_eq!(book.authors, vec![UNKNOWN_AUTHOR]);
        assert_eq!(book.genres, vec![UNKNOWN_GENRE]);
    }

    #[test]
    fn test_missing_title_is_empty() {
        let book = to_book(volume("abc", None, None, None));
        assert_eq!(book.title, "");
    }

    #[test]
    fn test_normalize_preserves_order_and_never_leaves_lists_empty() {
        let books = normalize(vec![
            volume("3", Some("C"), None, Some(&["x"])),
            volume("1", Some("A"), Some(&[]), None),
            volume("2", Some("B"), Some(&["y"]), Some(&[])),
        ]);
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert!(books.iter().all(|b| !b.authors.is_empty() && !b.genres.is_empty()));
    }

    #[test]
    fn test_normalize_drops_repeated_ids() {
        let books = normalize(vec![
            volume("1", Some("First"), None, None),
            volume("2", Some("Second"), None, None),
            volume("1", Some("First again"), None, None),
        ]);
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "First");
        assert_eq!(books[1].id, "2");
    }

    #[test]
    fn test_normalize_empty_batch() {
        assert!(normalize(Vec::new()).is_empty());
    }
}
