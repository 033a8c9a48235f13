//! Utility module
//!
//! - [`AppError`] / [`AppResult`] - unified error handling
//! - [`AppJson`] - request body extractor with 400 rejections
//! - validation helpers and logging setup

pub mod error;
pub mod extract;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, ErrorBody};
pub use extract::AppJson;
pub use result::AppResult;
