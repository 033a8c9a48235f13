//! Shared types for the LuxCars catalog
//!
//! Data models, auth DTOs, the pagination envelope, and id/time helpers,
//! used by the catalog server and any API client. Database row derives
//! are feature-gated behind `db` so clients can depend on this crate
//! without pulling in sqlx.

pub mod client;
pub mod models;
pub mod query;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use query::{PageMeta, Paginated};
pub use util::{now_millis, snowflake_id};
