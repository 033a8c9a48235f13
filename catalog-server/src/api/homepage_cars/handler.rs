//! Homepage Car API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::{car, homepage, image};
use crate::utils::{AppError, AppJson, AppResult};
use shared::models::{
    Car, Deleted, HomepageCar, HomepageCarCreate, HomepageCarDetail, HomepageReorder, IdPayload,
};

/// GET /api/homepage-cars - featured cars with full car payloads,
/// position order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<HomepageCarDetail>>> {
    let entries = homepage::find_all(&state.pool).await?;

    let mut details = Vec::with_capacity(entries.len());
    for entry in entries {
        // A missing car here means the delete path failed to clean up
        let row = car::find_by_id(&state.pool, entry.car_id).await?.ok_or_else(|| {
            AppError::database(format!(
                "Homepage entry {} references missing car {}",
                entry.id, entry.car_id
            ))
        })?;
        let images = image::find_variants_by_car(&state.pool, entry.car_id).await?;
        details.push(HomepageCarDetail {
            id: entry.id,
            display_order: entry.display_order,
            car: Car::from_parts(row, images),
        });
    }
    Ok(Json(details))
}

/// POST /api/homepage-cars - feature a car, appended at the end
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<HomepageCarCreate>,
) -> AppResult<(StatusCode, Json<HomepageCar>)> {
    if car::find_by_id(&state.pool, payload.car_id).await?.is_none() {
        return Err(AppError::not_found(format!(
            "Car {} not found",
            payload.car_id
        )));
    }

    let created = homepage::create(&state.pool, payload.car_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/homepage-cars - replace the ordering; the list must name
/// every entry exactly once
pub async fn reorder(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<HomepageReorder>,
) -> AppResult<Json<Vec<HomepageCar>>> {
    let entries = homepage::reorder(&state.pool, &payload.items).await?;
    Ok(Json(entries))
}

/// DELETE /api/homepage-cars - unfeature by entry id; remaining
/// positions close up
pub async fn remove(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<IdPayload>,
) -> AppResult<Json<Deleted>> {
    let deleted = homepage::delete(&state.pool, payload.id).await?;
    Ok(Json(Deleted { deleted }))
}
