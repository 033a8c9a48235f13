//! Brand API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::brand;
use crate::utils::validation::{
    validate_optional_text, validate_required_text, MAX_NAME_LEN, MAX_URL_LEN,
};
use crate::utils::{AppJson, AppResult};
use shared::models::{Brand, BrandCreate, BrandUpdate, Deleted, IdPayload};

/// GET /api/brands - all brands, name order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Brand>>> {
    let brands = brand::find_all(&state.pool).await?;
    Ok(Json(brands))
}

/// POST /api/brands - create brand
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<BrandCreate>,
) -> AppResult<(StatusCode, Json<Brand>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(payload.image_url.as_deref(), "imageUrl", MAX_URL_LEN)?;

    let created = brand::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/brands - partial update by id
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<BrandUpdate>,
) -> AppResult<Json<Brand>> {
    validate_optional_text(payload.name.as_deref(), "name", MAX_NAME_LEN)?;
    validate_optional_text(payload.image_url.as_deref(), "imageUrl", MAX_URL_LEN)?;

    let updated = brand::update(&state.pool, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/brands - delete by id, blocked while cars reference it
pub async fn remove(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<IdPayload>,
) -> AppResult<Json<Deleted>> {
    let deleted = brand::delete(&state.pool, payload.id).await?;
    Ok(Json(Deleted { deleted }))
}
