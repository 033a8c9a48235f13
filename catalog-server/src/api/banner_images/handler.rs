//! Banner Image API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::banner;
use crate::utils::AppResult;
use shared::models::Deleted;

/// DELETE /api/banner-images/{id} - remove an unreferenced pool image
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Deleted>> {
    let url = banner::delete_image(&state.pool, id).await?;
    state.images.remove_by_url(&url).await;
    Ok(Json(Deleted { deleted: true }))
}
