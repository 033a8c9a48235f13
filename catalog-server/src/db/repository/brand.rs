//! Brand Repository

use super::{RepoError, RepoResult};
use shared::models::{Brand, BrandCreate, BrandUpdate};
use sqlx::SqlitePool;

const BRAND_SELECT: &str =
    "SELECT id, name, image_url, created_at, updated_at FROM brand";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Brand>> {
    let rows = sqlx::query_as::<_, Brand>(&format!("{BRAND_SELECT} ORDER BY name"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Brand>> {
    let row = sqlx::query_as::<_, Brand>(&format!("{BRAND_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Brand>> {
    let row = sqlx::query_as::<_, Brand>(&format!("{BRAND_SELECT} WHERE name = ? LIMIT 1"))
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: BrandCreate) -> RepoResult<Brand> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Brand '{}' already exists",
            data.name
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO brand (id, name, image_url, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.image_url)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create brand".into()))
}

pub async fn update(pool: &SqlitePool, data: BrandUpdate) -> RepoResult<Brand> {
    let id = data.id;
    // Check duplicate name if changing
    if let Some(ref new_name) = data.name
        && let Some(other) = find_by_name(pool, new_name).await?
        && other.id != id
    {
        return Err(RepoError::Duplicate(format!(
            "Brand '{new_name}' already exists"
        )));
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE brand SET name = COALESCE(?1, name), image_url = COALESCE(?2, image_url), updated_at = ?3 WHERE id = ?4",
    )
    .bind(&data.name)
    .bind(&data.image_url)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Brand {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Brand {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let in_use = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM car WHERE brand_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if in_use > 0 {
        return Err(RepoError::Validation(format!(
            "Cannot delete brand: {in_use} car(s) reference it"
        )));
    }

    let rows = sqlx::query("DELETE FROM brand WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Brand {id} not found")));
    }
    Ok(true)
}
