//! Status API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::status;
use crate::utils::validation::{validate_required_text, MAX_NAME_LEN};
use crate::utils::{AppJson, AppResult};
use shared::models::{Deleted, IdPayload, Status, StatusCreate, StatusUpdate};

/// GET /api/status - all statuses, display order then name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Status>>> {
    let statuses = status::find_all(&state.pool).await?;
    Ok(Json(statuses))
}

/// POST /api/status - create status
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<StatusCreate>,
) -> AppResult<(StatusCode, Json<Status>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let created = status::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/status - partial update by id
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<StatusUpdate>,
) -> AppResult<Json<Status>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }

    let updated = status::update(&state.pool, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/status - delete by id, blocked while cars reference it
pub async fn remove(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<IdPayload>,
) -> AppResult<Json<Deleted>> {
    let deleted = status::delete(&state.pool, payload.id).await?;
    Ok(Json(Deleted { deleted }))
}
