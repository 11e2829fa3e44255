// src/catalog/error.rs
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Rejected before touching the quote tables.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("author {0:?} not found")]
    AuthorNotFound(String),
    #[error("database {path} unavailable: {reason}")]
    Unavailable { path: String, reason: String },
    #[error("query failed: {0}")]
    Database(#[from] rusqlite::Error),
}

impl QueryError {
    pub(crate) fn unavailable(path: &Path, reason: impl ToString) -> Self {
        QueryError::Unavailable { path: path.display().to_string(), reason: reason.to_string() }
    }
}
