//! Repository Module
//!
//! Free functions over the SQLite pool, one module per table. Handlers
//! never build SQL themselves.

// Auth
pub mod user;

// Lookup tables
pub mod brand;
pub mod car_model;
pub mod color;
pub mod status;

// Catalog
pub mod car;
pub mod image;

// Homepage content
pub mod banner;
pub mod homepage;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
