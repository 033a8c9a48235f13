//! Banner Repository
//!
//! Hero banner slides and the image pool they draw from. A banner
//! image may back several slides, so deleting one is blocked while any
//! slide still references it.

use super::{RepoError, RepoResult};
use shared::models::{BannerImage, BannerSlideCreate, BannerSlideRow, BannerSlideUpdate};
use sqlx::SqlitePool;

const SLIDE_SELECT: &str = "SELECT \
    s.id, s.title, s.subtitle, \
    s.main_image_id, mi.url AS main_image_url, \
    s.background_image_id, bi.url AS background_image_url, \
    s.created_at, s.updated_at \
    FROM banner_slide s \
    JOIN banner_image mi ON mi.id = s.main_image_id \
    JOIN banner_image bi ON bi.id = s.background_image_id";

// ── Banner images ────────────────────────────────────────────

pub async fn create_image(pool: &SqlitePool, url: &str) -> RepoResult<BannerImage> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO banner_image (id, url, created_at) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(url)
        .bind(now)
        .execute(pool)
        .await?;

    find_image(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create banner image".into()))
}

pub async fn find_image(pool: &SqlitePool, id: i64) -> RepoResult<Option<BannerImage>> {
    let row = sqlx::query_as::<_, BannerImage>(
        "SELECT id, url, created_at FROM banner_image WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Slides still using the image, as (id, title) pairs for the error
/// message.
pub async fn slides_referencing_image(
    pool: &SqlitePool,
    image_id: i64,
) -> RepoResult<Vec<(i64, String)>> {
    let rows = sqlx::query_as::<_, (i64, String)>(
        "SELECT id, title FROM banner_slide WHERE main_image_id = ?1 OR background_image_id = ?1",
    )
    .bind(image_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Delete an unreferenced banner image, returning its URL so the
/// caller can remove the file.
pub async fn delete_image(pool: &SqlitePool, id: i64) -> RepoResult<String> {
    let image = find_image(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Banner image {id} not found")))?;

    let referencing = slides_referencing_image(pool, id).await?;
    if !referencing.is_empty() {
        let titles = referencing
            .iter()
            .map(|(_, title)| title.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(RepoError::Validation(format!(
            "Banner image {id} is referenced by slide(s): {titles}"
        )));
    }

    sqlx::query("DELETE FROM banner_image WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(image.url)
}

// ── Banner slides ────────────────────────────────────────────

pub async fn find_all_slides(pool: &SqlitePool) -> RepoResult<Vec<BannerSlideRow>> {
    let rows = sqlx::query_as::<_, BannerSlideRow>(&format!("{SLIDE_SELECT} ORDER BY s.id"))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_slide(pool: &SqlitePool, id: i64) -> RepoResult<Option<BannerSlideRow>> {
    let row = sqlx::query_as::<_, BannerSlideRow>(&format!("{SLIDE_SELECT} WHERE s.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn require_image(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    if find_image(pool, id).await?.is_none() {
        return Err(RepoError::Validation(format!(
            "Banner image {id} does not exist"
        )));
    }
    Ok(())
}

pub async fn create_slide(pool: &SqlitePool, data: BannerSlideCreate) -> RepoResult<BannerSlideRow> {
    require_image(pool, data.main_image_id).await?;
    require_image(pool, data.background_image_id).await?;

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO banner_slide (id, title, subtitle, main_image_id, background_image_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.subtitle)
    .bind(data.main_image_id)
    .bind(data.background_image_id)
    .bind(now)
    .execute(pool)
    .await?;

    find_slide(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create banner slide".into()))
}

/// Full replace, not a patch: slides are small enough that the admin
/// UI always sends every field.
pub async fn update_slide(pool: &SqlitePool, data: BannerSlideUpdate) -> RepoResult<BannerSlideRow> {
    let id = data.id;
    require_image(pool, data.main_image_id).await?;
    require_image(pool, data.background_image_id).await?;

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE banner_slide SET title = ?1, subtitle = ?2, main_image_id = ?3, background_image_id = ?4, updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.title)
    .bind(&data.subtitle)
    .bind(data.main_image_id)
    .bind(data.background_image_id)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Banner slide {id} not found")));
    }

    find_slide(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Banner slide {id} not found")))
}

pub async fn delete_slide(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM banner_slide WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Banner slide {id} not found")));
    }
    Ok(true)
}
