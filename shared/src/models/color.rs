//! Color model

use serde::{Deserialize, Serialize};

/// Color lookup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub id: i64,
    pub name: String,
    /// `#RRGGBB` swatch shown by the storefront filter
    pub rgb: String,
    #[serde(rename = "order")]
    pub display_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create color payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCreate {
    pub name: String,
    pub rgb: String,
    #[serde(rename = "order")]
    pub display_order: Option<i64>,
}

/// Update color payload (partial; the id travels in the body)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub rgb: Option<String>,
    #[serde(rename = "order")]
    pub display_order: Option<i64>,
}
