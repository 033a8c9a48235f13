//! Authentication module
//!
//! - [`JwtService`] / [`Claims`] - session token issuing and validation
//! - [`CurrentUser`] - per-request user context
//! - [`require_admin`] - admin gate middleware for mutating routes
//! - [`password`] - the `hash:salt` password scheme

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_admin;
pub use password::PasswordError;
