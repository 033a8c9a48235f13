use crate::utils::error::AppError;

/// Result type for handler and service operations
pub type AppResult<T> = Result<T, AppError>;
