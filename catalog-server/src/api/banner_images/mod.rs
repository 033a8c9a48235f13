//! Banner Image API module
//!
//! Uploads go through `/api/upload`; this module only handles removal
//! of pool images that no slide references anymore.

mod handler;

use axum::{Router, middleware, routing::delete};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/api/banner-images/{id}", delete(handler::remove))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
}
