//! Status Repository

use super::{RepoError, RepoResult};
use shared::models::{Status, StatusCreate, StatusUpdate};
use sqlx::SqlitePool;

const STATUS_SELECT: &str =
    "SELECT id, name, display_order, created_at, updated_at FROM status";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Status>> {
    let rows = sqlx::query_as::<_, Status>(&format!(
        "{STATUS_SELECT} ORDER BY display_order, name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Status>> {
    let row = sqlx::query_as::<_, Status>(&format!("{STATUS_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Status>> {
    let row = sqlx::query_as::<_, Status>(&format!("{STATUS_SELECT} WHERE name = ? LIMIT 1"))
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: StatusCreate) -> RepoResult<Status> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Status '{}' already exists",
            data.name
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let display_order = data.display_order.unwrap_or(0);
    sqlx::query(
        "INSERT INTO status (id, name, display_order, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(display_order)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create status".into()))
}

pub async fn update(pool: &SqlitePool, data: StatusUpdate) -> RepoResult<Status> {
    let id = data.id;
    if let Some(ref new_name) = data.name
        && let Some(other) = find_by_name(pool, new_name).await?
        && other.id != id
    {
        return Err(RepoError::Duplicate(format!(
            "Status '{new_name}' already exists"
        )));
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE status SET name = COALESCE(?1, name), display_order = COALESCE(?2, display_order), updated_at = ?3 WHERE id = ?4",
    )
    .bind(&data.name)
    .bind(data.display_order)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Status {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Status {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let in_use = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM car WHERE status_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if in_use > 0 {
        return Err(RepoError::Validation(format!(
            "Cannot delete status: {in_use} car(s) reference it"
        )));
    }

    let rows = sqlx::query("DELETE FROM status WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Status {id} not found")));
    }
    Ok(true)
}
