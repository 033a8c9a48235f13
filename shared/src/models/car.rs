//! Car model
//!
//! [`CarRow`] is the flat row produced by joining a car with its four
//! lookup entities and optional thumbnail; [`Car`] is the nested shape
//! the API returns. Variant images are fetched separately and attached
//! via [`Car::from_parts`].

use serde::{Deserialize, Serialize};

use super::image::{ImageRef, VariantImage};

/// Joined car row as read from the database.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CarRow {
    pub id: i64,
    pub name: String,
    /// Decimal stored as TEXT; ordering happens in the application
    pub price: String,
    pub scale: String,
    pub description: String,
    pub brand_id: i64,
    pub brand_name: String,
    pub brand_image_url: Option<String>,
    pub model_id: i64,
    pub model_name: String,
    pub model_image_url: Option<String>,
    pub model_display_order: i64,
    pub color_id: i64,
    pub color_name: String,
    pub color_rgb: String,
    pub color_display_order: i64,
    pub status_id: i64,
    pub status_name: String,
    pub status_display_order: i64,
    pub thumbnail_image_id: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Brand fields embedded in a car payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandSummary {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
}

/// Model fields embedded in a car payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    #[serde(rename = "order")]
    pub display_order: i64,
}

/// Color fields embedded in a car payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSummary {
    pub id: i64,
    pub name: String,
    pub rgb: String,
    #[serde(rename = "order")]
    pub display_order: i64,
}

/// Status fields embedded in a car payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub id: i64,
    pub name: String,
    #[serde(rename = "order")]
    pub display_order: i64,
}

/// Full car shape returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub scale: String,
    pub description: String,
    pub brand: BrandSummary,
    pub model: ModelSummary,
    pub color: ColorSummary,
    pub status: StatusSummary,
    pub thumbnail: Option<ImageRef>,
    pub images: Vec<VariantImage>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Car {
    /// Assemble the nested API shape from a joined row plus its gallery.
    pub fn from_parts(row: CarRow, images: Vec<VariantImage>) -> Self {
        let thumbnail = match (row.thumbnail_image_id, row.thumbnail_url) {
            (Some(id), Some(url)) => Some(ImageRef { id, url }),
            _ => None,
        };
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            scale: row.scale,
            description: row.description,
            brand: BrandSummary {
                id: row.brand_id,
                name: row.brand_name,
                image_url: row.brand_image_url,
            },
            model: ModelSummary {
                id: row.model_id,
                name: row.model_name,
                image_url: row.model_image_url,
                display_order: row.model_display_order,
            },
            color: ColorSummary {
                id: row.color_id,
                name: row.color_name,
                rgb: row.color_rgb,
                display_order: row.color_display_order,
            },
            status: StatusSummary {
                id: row.status_id,
                name: row.status_name,
                display_order: row.status_display_order,
            },
            thumbnail,
            images,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Create car payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCreate {
    pub name: String,
    pub price: String,
    pub scale: String,
    pub description: Option<String>,
    pub brand_id: i64,
    pub model_id: i64,
    pub color_id: i64,
    pub status_id: i64,
    pub thumbnail_image_id: Option<i64>,
}

/// Update car payload (partial; the id travels in the body)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<String>,
    pub scale: Option<String>,
    pub description: Option<String>,
    pub brand_id: Option<i64>,
    pub model_id: Option<i64>,
    pub color_id: Option<i64>,
    pub status_id: Option<i64>,
    pub thumbnail_image_id: Option<i64>,
}
