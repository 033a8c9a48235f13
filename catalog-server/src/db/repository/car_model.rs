//! Car Model Repository

use super::{RepoError, RepoResult};
use shared::models::{CarModel, CarModelCreate, CarModelUpdate};
use sqlx::SqlitePool;

const MODEL_SELECT: &str =
    "SELECT id, name, image_url, display_order, created_at, updated_at FROM car_model";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<CarModel>> {
    let rows = sqlx::query_as::<_, CarModel>(&format!(
        "{MODEL_SELECT} ORDER BY display_order, name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<CarModel>> {
    let row = sqlx::query_as::<_, CarModel>(&format!("{MODEL_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<CarModel>> {
    let row = sqlx::query_as::<_, CarModel>(&format!("{MODEL_SELECT} WHERE name = ? LIMIT 1"))
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: CarModelCreate) -> RepoResult<CarModel> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Model '{}' already exists",
            data.name
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let display_order = data.display_order.unwrap_or(0);
    sqlx::query(
        "INSERT INTO car_model (id, name, image_url, display_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.image_url)
    .bind(display_order)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create model".into()))
}

pub async fn update(pool: &SqlitePool, data: CarModelUpdate) -> RepoResult<CarModel> {
    let id = data.id;
    if let Some(ref new_name) = data.name
        && let Some(other) = find_by_name(pool, new_name).await?
        && other.id != id
    {
        return Err(RepoError::Duplicate(format!(
            "Model '{new_name}' already exists"
        )));
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE car_model SET name = COALESCE(?1, name), image_url = COALESCE(?2, image_url), display_order = COALESCE(?3, display_order), updated_at = ?4 WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.image_url)
    .bind(data.display_order)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Model {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Model {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let in_use = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM car WHERE model_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if in_use > 0 {
        return Err(RepoError::Validation(format!(
            "Cannot delete model: {in_use} car(s) reference it"
        )));
    }

    let rows = sqlx::query("DELETE FROM car_model WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Model {id} not found")));
    }
    Ok(true)
}
