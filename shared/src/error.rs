//! # Navigation Errors
//!
//! The navigation model has a single guarded condition: a search submitted
//! with blank text. Callers treat it as a silent no-op rather than surfacing
//! it to the user.

use thiserror::Error;

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The search text was empty or whitespace only.
    #[error("search query is empty")]
    EmptySearchQuery,
}
