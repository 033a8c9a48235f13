//! Homepage curation models

use serde::{Deserialize, Serialize};

use super::car::Car;

/// Homepage entry row.
///
/// `display_order` is kept a dense 1..N sequence by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct HomepageCar {
    pub id: i64,
    pub car_id: i64,
    #[serde(rename = "order")]
    pub display_order: i64,
    pub created_at: i64,
}

/// Homepage entry with its embedded car (GET list shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageCarDetail {
    pub id: i64,
    #[serde(rename = "order")]
    pub display_order: i64,
    pub car: Car,
}

/// Append-to-homepage payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageCarCreate {
    pub car_id: i64,
}

/// Full reorder payload: every current entry id exactly once, in the
/// desired display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomepageReorder {
    pub items: Vec<i64>,
}
