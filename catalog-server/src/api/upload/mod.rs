//! Upload API module
//!
//! One multipart endpoint for every image kind; the `type` form field
//! decides which table the stored file is recorded in.

mod handler;

use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/api/upload", post(handler::upload))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        // Body cap sits above the file limit so multipart framing does
        // not reject a maximal file
        .layer(DefaultBodyLimit::max(handler::MAX_UPLOAD_SIZE + 64 * 1024))
}
