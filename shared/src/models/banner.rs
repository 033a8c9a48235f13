//! Homepage banner models

use serde::{Deserialize, Serialize};

use super::image::ImageRef;

/// Banner image row (shared pool referenced by slides)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct BannerImage {
    pub id: i64,
    pub url: String,
    pub created_at: i64,
}

/// Banner slide row joined with both of its images.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BannerSlideRow {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub main_image_id: i64,
    pub main_image_url: String,
    pub background_image_id: i64,
    pub background_image_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Banner slide shape returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerSlide {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub main_image: ImageRef,
    pub background_image: ImageRef,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<BannerSlideRow> for BannerSlide {
    fn from(row: BannerSlideRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            subtitle: row.subtitle,
            main_image: ImageRef {
                id: row.main_image_id,
                url: row.main_image_url,
            },
            background_image: ImageRef {
                id: row.background_image_id,
                url: row.background_image_url,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Create slide payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerSlideCreate {
    pub title: String,
    pub subtitle: Option<String>,
    pub main_image_id: i64,
    pub background_image_id: i64,
}

/// Full-update slide payload (PUT; the id travels in the body)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerSlideUpdate {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub main_image_id: i64,
    pub background_image_id: i64,
}
