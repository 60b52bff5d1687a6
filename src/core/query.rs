//! Query string construction for the volumes endpoint.
//!
//! Each non-empty field becomes a scoped clause (`intitle:`, `inauthor:`,
//! `subject:`). Clauses are always joined in title, author, genre order with
//! `+`, so empty fields leave doubled separators behind (`q=intitle:dune++`).
//! The catalog tolerates that and we keep it as-is.
//!
//! Values are inserted verbatim. Characters that are illegal in a URL are
//! percent-encoded later by the HTTP client, which leaves the decoded value
//! unchanged.

use crate::core::book::SearchCriteria;

/// Upper bound the catalog accepts for `maxResults`.
pub const MAX_RESULTS: u32 = 40;

const CLAUSE_SEPARATOR: &str = "+";

fn clause(scope: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{scope}:{value}")
    }
}

/// Builds the query component (without the leading `?`).
pub fn build_query(criteria: &SearchCriteria, max_results: u32) -> String {
    let clauses = [
        clause("intitle", &criteria.title),
        clause("inauthor", &criteria.author),
        clause("subject", &criteria.genre),
    ];
    format!(
        "q={}&maxResults={}",
        clauses.join(CLAUSE_SEPARATOR),
        max_results
    )
}

/// Joins an endpoint and a query built by [`build_query`].
pub fn search_url(base_url: &str, query: &str) -> String {
    format!("{}?{}", base_url.trim_end_matches('?'), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_query_rules {
        ( $($name:ident: ($title:expr, $author:expr, $genre:expr) => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    let criteria = SearchCriteria::new($title, $author, $genre);
                    assert_eq!(build_query(&criteria, MAX_RESULTS), $expected);
                }
            )+
        };
    }

    test_query_rules! {
        test_query_all_fields: ("dune", "herbert", "fiction") =>
            "q=intitle:dune+inauthor:herbert+subject:fiction&maxResults=40",
        test_query_title_only: ("dune", "", "") => "q=intitle:dune++&maxResults=40",
        test_query_author_only: ("", "herbert", "") => "q=+inauthor:herbert+&maxResults=40",
        test_query_genre_only: ("", "", "fiction") => "q=++subject:fiction&maxResults=40",
        test_query_title_and_genre: ("dune", "", "fiction") =>
            "q=intitle:dune++subject:fiction&maxResults=40",
        test_query_all_empty: ("", "", "") => "q=++&maxResults=40",
        test_query_value_verbatim: ("the hobbit", "J.R.R. Tolkien", "") =>
            "q=intitle:the hobbit+inauthor:J.R.R. Tolkien+&maxResults=40",
    }

    #[test]
    fn test_empty_criteria_keeps_max_results_without_scopes() {
        let query = build_query(&SearchCriteria::default(), MAX_RESULTS);
        assert!(query.contains("maxResults=40"));
        for scope in ["intitle:", "inauthor:", "subject:"] {
            assert!(!query.contains(scope), "unexpected {scope} in {query}");
        }
    }

    #[test]
    fn test_custom_max_results() {
        let query = build_query(&SearchCriteria::new("dune", "", ""), 10);
        assert!(query.ends_with("&maxResults=10"));
    }

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url("https://example.test/volumes", "q=++&maxResults=40"),
            "https://example.test/volumes?q=++&maxResults=40"
        );
        assert_eq!(
            search_url("https://example.test/volumes?", "q=++&maxResults=40"),
            "https://example.test/volumes?q=++&maxResults=40"
        );
    }
}
