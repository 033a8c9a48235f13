//! Homepage Repository
//!
//! The curated "featured cars" strip. Positions are kept contiguous
//! from 1: every mutation renumbers inside its transaction.

use std::collections::HashSet;

use super::{RepoError, RepoResult};
use shared::models::HomepageCar;
use sqlx::{Sqlite, SqlitePool, Transaction};

const HOMEPAGE_SELECT: &str =
    "SELECT id, car_id, display_order, created_at FROM homepage_car";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<HomepageCar>> {
    let rows = sqlx::query_as::<_, HomepageCar>(&format!(
        "{HOMEPAGE_SELECT} ORDER BY display_order"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, car_id: i64) -> RepoResult<HomepageCar> {
    let mut tx = pool.begin().await?;

    let existing =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM homepage_car WHERE car_id = ?")
            .bind(car_id)
            .fetch_one(&mut *tx)
            .await?;
    if existing > 0 {
        return Err(RepoError::Duplicate(format!(
            "Car {car_id} is already featured on the homepage"
        )));
    }

    let next = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(MAX(display_order), 0) + 1 FROM homepage_car",
    )
    .fetch_one(&mut *tx)
    .await?;

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO homepage_car (id, car_id, display_order, created_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(id)
    .bind(car_id)
    .bind(next)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let row = sqlx::query_as::<_, HomepageCar>(&format!("{HOMEPAGE_SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or_else(|| RepoError::Database("Failed to create homepage entry".into()))
}

/// Replace the ordering with the given entry ids, first id becoming
/// position 1. The list must name every current entry exactly once.
pub async fn reorder(pool: &SqlitePool, items: &[i64]) -> RepoResult<Vec<HomepageCar>> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM homepage_car")
        .fetch_all(&mut *tx)
        .await?;

    let requested: HashSet<i64> = items.iter().copied().collect();
    if requested.len() != items.len() {
        return Err(RepoError::Validation(
            "items contains duplicate ids".to_string(),
        ));
    }
    let current: HashSet<i64> = existing.iter().copied().collect();
    if requested != current {
        return Err(RepoError::Validation(
            "items must list every homepage entry exactly once".to_string(),
        ));
    }

    for (position, id) in items.iter().enumerate() {
        sqlx::query("UPDATE homepage_car SET display_order = ? WHERE id = ?")
            .bind((position + 1) as i64)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    find_all(pool).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query("DELETE FROM homepage_car WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Homepage entry {id} not found"
        )));
    }

    renumber(&mut tx).await?;
    tx.commit().await?;
    Ok(true)
}

/// Reassign positions 1..N in the current order. Runs inside the
/// caller's transaction.
pub(crate) async fn renumber(tx: &mut Transaction<'_, Sqlite>) -> RepoResult<()> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM homepage_car ORDER BY display_order, id",
    )
    .fetch_all(&mut **tx)
    .await?;

    for (position, id) in ids.iter().enumerate() {
        sqlx::query("UPDATE homepage_car SET display_order = ? WHERE id = ?")
            .bind((position + 1) as i64)
            .bind(id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}
