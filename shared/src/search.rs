//! # Search Redirect
//!
//! Submitting the navbar search never calls a backend. It redirects to the
//! products page with the query in the `search` parameter, where the page
//! itself filters.

use crate::error::{Error, Result};

/// Page the search redirects to.
pub const SEARCH_PATH: &str = "/products";

/// Query parameter carrying the search text.
pub const SEARCH_PARAM: &str = "search";

/// Build the redirect target for `query`.
///
/// Blank input (empty after trimming) is rejected. The text that gets encoded
/// is the raw query, surrounding whitespace included; trimming only decides
/// whether a search happens at all.
///
/// # Examples
///
/// ```rust
/// use shared::search::search_target;
/// use shared::Error;
///
/// assert_eq!(search_target("vitamin c").unwrap(), "/products?search=vitamin%20c");
/// assert_eq!(search_target("   "), Err(Error::EmptySearchQuery));
/// ```
pub fn search_target(query: &str) -> Result<String> {
    if query.trim().is_empty() {
        return Err(Error::EmptySearchQuery);
    }

    Ok(format!(
        "{}?{}={}",
        SEARCH_PATH,
        SEARCH_PARAM,
        urlencoding::encode(query)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_queries_rejected() {
        for query in ["", " ", "\t", "\n  \t", "\u{3000}"] {
            assert_eq!(search_target(query), Err(Error::EmptySearchQuery), "{query:?}");
        }
    }

    #[test]
    fn test_simple_query() {
        assert_eq!(search_target("serum").unwrap(), "/products?search=serum");
    }

    #[test]
    fn test_raw_query_is_encoded_untrimmed() {
        assert_eq!(
            search_target("  rose serum  ").unwrap(),
            "/products?search=%20%20rose%20serum%20%20"
        );
    }

    #[test]
    fn test_reserved_characters_encoded() {
        assert_eq!(
            search_target("a&b=c?d/e#f").unwrap(),
            "/products?search=a%26b%3Dc%3Fd%2Fe%23f"
        );
        assert_eq!(search_target("100%").unwrap(), "/products?search=100%25");
    }

    #[test]
    fn test_non_ascii_encoded_as_utf8() {
        assert_eq!(search_target("rêve").unwrap(), "/products?search=r%C3%AAve");
    }
}
