//! Server-level errors (startup and shutdown paths)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("startup failed: {0}")]
    Startup(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
