//! Car model (the product line, e.g. "911 GT3")

use serde::{Deserialize, Serialize};

/// Model lookup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct CarModel {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    #[serde(rename = "order")]
    pub display_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create model payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarModelCreate {
    pub name: String,
    pub image_url: Option<String>,
    #[serde(rename = "order")]
    pub display_order: Option<i64>,
}

/// Update model payload (partial; the id travels in the body)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarModelUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "order")]
    pub display_order: Option<i64>,
}
