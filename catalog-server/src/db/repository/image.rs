//! Image Repository
//!
//! Rows for stored image files: car thumbnails and per-car variant
//! shots. Banner imagery lives in [`super::banner`].

use super::{RepoError, RepoResult};
use shared::models::{ThumbnailImage, VariantImage};
use sqlx::SqlitePool;

// ── Thumbnails ───────────────────────────────────────────────

pub async fn create_thumbnail(pool: &SqlitePool, url: &str) -> RepoResult<ThumbnailImage> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO thumbnail_image (id, url, created_at) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(url)
        .bind(now)
        .execute(pool)
        .await?;

    find_thumbnail(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create thumbnail image".into()))
}

pub async fn find_thumbnail(pool: &SqlitePool, id: i64) -> RepoResult<Option<ThumbnailImage>> {
    let row = sqlx::query_as::<_, ThumbnailImage>(
        "SELECT id, url, created_at FROM thumbnail_image WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

// ── Variant images ───────────────────────────────────────────

pub async fn create_variant(pool: &SqlitePool, car_id: i64, url: &str) -> RepoResult<VariantImage> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO variant_image (id, car_id, url, created_at) VALUES (?1, ?2, ?3, ?4)")
        .bind(id)
        .bind(car_id)
        .bind(url)
        .bind(now)
        .execute(pool)
        .await?;

    let row = sqlx::query_as::<_, VariantImage>(
        "SELECT id, car_id, url, created_at FROM variant_image WHERE id = ?",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn find_variants_by_car(pool: &SqlitePool, car_id: i64) -> RepoResult<Vec<VariantImage>> {
    let rows = sqlx::query_as::<_, VariantImage>(
        "SELECT id, car_id, url, created_at FROM variant_image WHERE car_id = ? ORDER BY id",
    )
    .bind(car_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Variant images for a whole result page in one query.
pub async fn find_variants_by_cars(
    pool: &SqlitePool,
    car_ids: &[i64],
) -> RepoResult<Vec<VariantImage>> {
    if car_ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = car_ids.iter().map(|_| "?").collect::<Vec<_>>().join(",");
    let sql = format!(
        "SELECT id, car_id, url, created_at FROM variant_image WHERE car_id IN ({placeholders}) ORDER BY id"
    );
    let mut query = sqlx::query_as::<_, VariantImage>(&sql);
    for id in car_ids {
        query = query.bind(id);
    }
    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}
