//! Car Model API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::car_model;
use crate::utils::validation::{
    validate_optional_text, validate_required_text, MAX_NAME_LEN, MAX_URL_LEN,
};
use crate::utils::{AppJson, AppResult};
use shared::models::{CarModel, CarModelCreate, CarModelUpdate, Deleted, IdPayload};

/// GET /api/models - all models, display order then name
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CarModel>>> {
    let models = car_model::find_all(&state.pool).await?;
    Ok(Json(models))
}

/// POST /api/models - create model
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CarModelCreate>,
) -> AppResult<(StatusCode, Json<CarModel>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(payload.image_url.as_deref(), "imageUrl", MAX_URL_LEN)?;

    let created = car_model::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /api/models - partial update by id
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CarModelUpdate>,
) -> AppResult<Json<CarModel>> {
    validate_optional_text(payload.name.as_deref(), "name", MAX_NAME_LEN)?;
    validate_optional_text(payload.image_url.as_deref(), "imageUrl", MAX_URL_LEN)?;

    let updated = car_model::update(&state.pool, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/models - delete by id, blocked while cars reference it
pub async fn remove(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<IdPayload>,
) -> AppResult<Json<Deleted>> {
    let deleted = car_model::delete(&state.pool, payload.id).await?;
    Ok(Json(Deleted { deleted }))
}
