//! Error types and result aliases for Marquee.
//!
//! Errors are structured for programmatic handling; the API layer maps them
//! onto the HTTP contract.

/// The result type used throughout Marquee.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A movie with the given id is already stored.
    #[error("movie already exists: {id}")]
    AlreadyExists {
        /// The duplicate movie id.
        id: String,
    },

    /// The requested movie was not found.
    #[error("movie not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal error occurred that should not happen in normal operation.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl Error {
    /// Creates a new not-found error for the given movie id.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a new already-exists error for the given movie id.
    #[must_use]
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }
}
