//! Availability status model

use serde::{Deserialize, Serialize};

/// Status lookup entity (e.g. "In stock", "Pre-order")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: i64,
    pub name: String,
    #[serde(rename = "order")]
    pub display_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCreate {
    pub name: String,
    #[serde(rename = "order")]
    pub display_order: Option<i64>,
}

/// Update status payload (partial; the id travels in the body)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub id: i64,
    pub name: Option<String>,
    #[serde(rename = "order")]
    pub display_order: Option<i64>,
}
