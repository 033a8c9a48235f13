//! Image delivery route
//!
//! Serves stored files back under the same URLs the upload endpoint
//! minted. Public: storefront pages embed these directly.

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::core::ServerState;
use crate::services::StoreError;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/images/{*key}", get(serve_image))
}

/// GET /api/images/{key} - raw file bytes with a guessed content type
pub async fn serve_image(State(state): State<ServerState>, Path(key): Path<String>) -> Response {
    match state.images.read(&key).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&key).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
        }
        Err(StoreError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "File not found").into_response()
        }
        Err(StoreError::InvalidKey(_)) => {
            (StatusCode::BAD_REQUEST, "Invalid file path").into_response()
        }
        Err(e) => {
            tracing::error!(key = %key, error = %e, "Failed to read stored image");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response()
        }
    }
}
