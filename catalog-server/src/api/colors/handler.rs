//! Color API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::color;
use crate::utils::validation::{validate_required_text, validate_rgb, MAX_NAME_LEN};
use crate::utils::{AppJson, AppResult};
use shared::models::{Color, ColorCreate, ColorUpdate, Deleted, IdPayload};

/// GET /api/colors - all colors, display order then name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Color>>> {
    let colors = color::find_all(&state.pool).await?;
    Ok(Json(colors))
}

/// POST /api/colors - create color
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ColorCreate>,
) -> AppResult<(StatusCode, Json<Color>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_rgb(&payload.rgb)?;

    let created = color::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/colors - partial update by id
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ColorUpdate>,
) -> AppResult<Json<Color>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref rgb) = payload.rgb {
        validate_rgb(rgb)?;
    }

    let updated = color::update(&state.pool, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/colors - delete by id, blocked while cars reference it
pub async fn remove(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<IdPayload>,
) -> AppResult<Json<Deleted>> {
    let deleted = color::delete(&state.pool, payload.id).await?;
    Ok(Json(Deleted { deleted }))
}
