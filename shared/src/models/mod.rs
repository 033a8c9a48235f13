//! Data models
//!
//! Shared between the catalog server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes (JS-safe, time-ordered); timestamps are
//! milliseconds since the UNIX epoch.

pub mod banner;
pub mod brand;
pub mod car;
pub mod car_model;
pub mod color;
pub mod homepage;
pub mod image;
pub mod status;
pub mod user;

// Re-exports
pub use banner::*;
pub use brand::*;
pub use car::*;
pub use car_model::*;
pub use color::*;
pub use homepage::*;
pub use image::*;
pub use status::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Id-in-body payload used by update/delete routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdPayload {
    pub id: i64,
}

/// Uniform delete acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deleted {
    pub deleted: bool,
}
