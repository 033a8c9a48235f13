//! Banner Slide API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::banner;
use crate::utils::validation::{validate_optional_text, validate_required_text, MAX_NAME_LEN};
use crate::utils::{AppJson, AppResult};
use shared::models::{BannerSlide, BannerSlideCreate, BannerSlideUpdate, Deleted, IdPayload};

/// GET /api/banner-slides - all slides, id order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BannerSlide>>> {
    let rows = banner::find_all_slides(&state.pool).await?;
    let slides = rows.into_iter().map(BannerSlide::from).collect();
    Ok(Json(slides))
}

/// POST /api/banner-slides - create slide
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<BannerSlideCreate>,
) -> AppResult<(StatusCode, Json<BannerSlide>)> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(payload.subtitle.as_deref(), "subtitle", MAX_NAME_LEN)?;

    let created = banner::create_slide(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(BannerSlide::from(created))))
}

/// PUT /api/banner-slides - full replace by id
pub async fn update(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<BannerSlideUpdate>,
) -> AppResult<Json<BannerSlide>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(payload.subtitle.as_deref(), "subtitle", MAX_NAME_LEN)?;

    let updated = banner::update_slide(&state.pool, payload).await?;
    Ok(Json(BannerSlide::from(updated)))
}

/// DELETE /api/banner-slides - delete by id
pub async fn remove(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<IdPayload>,
) -> AppResult<Json<Deleted>> {
    let deleted = banner::delete_slide(&state.pool, payload.id).await?;
    Ok(Json(Deleted { deleted }))
}
