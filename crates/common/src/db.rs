//! Shared database types for Cerebrum
//!
//! Common store error used by every domain repository, plus the helper that
//! recognizes unique-constraint violations.

use crate::error::Error;
use thiserror::Error;

/// Result type returned by store implementations
pub type StoreResult<T> = std::result::Result<T, RepositoryError>;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record already exists")]
    AlreadyExists,

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::Connection(e) => Error::Database(e),
        }
    }
}

/// Name of the unique constraint violated by `err`, if any.
pub fn unique_violation(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Some(
            db_err
                .constraint()
                .map(str::to_string)
                .unwrap_or_default(),
        ),
        _ => None,
    }
}
