//! Image reference models

use serde::{Deserialize, Serialize};

/// Lightweight image reference embedded in other payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    pub id: i64,
    pub url: String,
}

/// Thumbnail image row (referenced 1:1 by `car.thumbnail_image_id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailImage {
    pub id: i64,
    pub url: String,
    pub created_at: i64,
}

/// Variant image row (gallery shot, N per car)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct VariantImage {
    pub id: i64,
    pub car_id: i64,
    pub url: String,
    pub created_at: i64,
}
