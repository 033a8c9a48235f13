//! Car Repository
//!
//! Every read goes through [`CAR_SELECT`], a five-way join that
//! denormalizes brand/model/color/status names and the thumbnail URL
//! into one flat row.

use super::{RepoError, RepoResult};
use crate::catalog::{CatalogFilter, CatalogPage, SqlArg};
use shared::models::{CarCreate, CarRow, CarUpdate};
use sqlx::SqlitePool;

const CAR_SELECT: &str = "SELECT \
    c.id, c.name, c.price, c.scale, c.description, \
    c.brand_id, b.name AS brand_name, b.image_url AS brand_image_url, \
    c.model_id, m.name AS model_name, m.image_url AS model_image_url, m.display_order AS model_display_order, \
    c.color_id, co.name AS color_name, co.rgb AS color_rgb, co.display_order AS color_display_order, \
    c.status_id, s.name AS status_name, s.display_order AS status_display_order, \
    c.thumbnail_image_id, t.url AS thumbnail_url, \
    c.created_at, c.updated_at \
    FROM car c \
    JOIN brand b ON b.id = c.brand_id \
    JOIN car_model m ON m.id = c.model_id \
    JOIN color co ON co.id = c.color_id \
    JOIN status s ON s.id = c.status_id \
    LEFT JOIN thumbnail_image t ON t.id = c.thumbnail_image_id";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<CarRow>> {
    let rows = sqlx::query_as::<_, CarRow>(&format!("{CAR_SELECT} ORDER BY c.id"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<CarRow>> {
    let row = sqlx::query_as::<_, CarRow>(&format!("{CAR_SELECT} WHERE c.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Oldest entries first: the storefront treats the earliest catalog
/// additions as the featured set.
pub async fn find_popular(pool: &SqlitePool, limit: u32) -> RepoResult<Vec<CarRow>> {
    let rows = sqlx::query_as::<_, CarRow>(&format!("{CAR_SELECT} ORDER BY c.id ASC LIMIT ?"))
        .bind(limit as i64)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Total rows matching the filter. The predicates only touch car
/// columns, so no joins are needed here.
pub async fn count_filtered(pool: &SqlitePool, filter: &CatalogFilter) -> RepoResult<u64> {
    let sql = format!("SELECT COUNT(*) FROM car c{}", filter.where_sql());
    let mut query = sqlx::query_scalar::<_, i64>(&sql);
    for arg in filter.bind_args() {
        query = match arg {
            SqlArg::Int(v) => query.bind(v),
            SqlArg::Text(v) => query.bind(v),
        };
    }
    let count = query.fetch_one(pool).await?;
    Ok(count as u64)
}

/// One page, ordered by the database. Not valid for price sorts; the
/// caller uses [`find_filtered`] and sorts in memory instead.
pub async fn find_page(
    pool: &SqlitePool,
    filter: &CatalogFilter,
    page: &CatalogPage,
) -> RepoResult<Vec<CarRow>> {
    let sql = format!(
        "{CAR_SELECT}{} ORDER BY {} {}, c.id ASC LIMIT ? OFFSET ?",
        filter.where_sql(),
        page.sort.column(),
        page.order.as_sql(),
    );
    let mut query = sqlx::query_as::<_, CarRow>(&sql);
    for arg in filter.bind_args() {
        query = match arg {
            SqlArg::Int(v) => query.bind(v),
            SqlArg::Text(v) => query.bind(v),
        };
    }
    let rows = query
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// The full filtered set in id order, for in-memory price sorting.
pub async fn find_filtered(pool: &SqlitePool, filter: &CatalogFilter) -> RepoResult<Vec<CarRow>> {
    let sql = format!("{CAR_SELECT}{} ORDER BY c.id ASC", filter.where_sql());
    let mut query = sqlx::query_as::<_, CarRow>(&sql);
    for arg in filter.bind_args() {
        query = match arg {
            SqlArg::Int(v) => query.bind(v),
            SqlArg::Text(v) => query.bind(v),
        };
    }
    let rows = query.fetch_all(pool).await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: CarCreate) -> RepoResult<CarRow> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO car (id, name, price, scale, description, brand_id, model_id, color_id, status_id, thumbnail_image_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.price)
    .bind(&data.scale)
    .bind(data.description.as_deref().unwrap_or(""))
    .bind(data.brand_id)
    .bind(data.model_id)
    .bind(data.color_id)
    .bind(data.status_id)
    .bind(data.thumbnail_image_id)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create car".into()))
}

pub async fn update(pool: &SqlitePool, data: CarUpdate) -> RepoResult<CarRow> {
    let id = data.id;
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE car SET name = COALESCE(?1, name), price = COALESCE(?2, price), scale = COALESCE(?3, scale), description = COALESCE(?4, description), brand_id = COALESCE(?5, brand_id), model_id = COALESCE(?6, model_id), color_id = COALESCE(?7, color_id), status_id = COALESCE(?8, status_id), thumbnail_image_id = COALESCE(?9, thumbnail_image_id), updated_at = ?10 WHERE id = ?11",
    )
    .bind(&data.name)
    .bind(&data.price)
    .bind(&data.scale)
    .bind(&data.description)
    .bind(data.brand_id)
    .bind(data.model_id)
    .bind(data.color_id)
    .bind(data.status_id)
    .bind(data.thumbnail_image_id)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Car {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Car {id} not found")))
}

/// Delete a car with everything hanging off it, returning the image
/// URLs whose files the caller should remove.
///
/// Order matters: variant images and homepage rows reference the car,
/// the car references its thumbnail.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<Vec<String>> {
    let mut tx = pool.begin().await?;

    let mut urls = sqlx::query_scalar::<_, String>("SELECT url FROM variant_image WHERE car_id = ?")
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

    let thumbnail = sqlx::query_as::<_, (i64, String)>(
        "SELECT t.id, t.url FROM thumbnail_image t JOIN car c ON c.thumbnail_image_id = t.id WHERE c.id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM variant_image WHERE car_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM homepage_car WHERE car_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    super::homepage::renumber(&mut tx).await?;

    let rows = sqlx::query("DELETE FROM car WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        // Dropping the transaction rolls everything back
        return Err(RepoError::NotFound(format!("Car {id} not found")));
    }

    if let Some((thumb_id, thumb_url)) = thumbnail {
        sqlx::query("DELETE FROM thumbnail_image WHERE id = ?")
            .bind(thumb_id)
            .execute(&mut *tx)
            .await?;
        urls.push(thumb_url);
    }

    tx.commit().await?;
    Ok(urls)
}
