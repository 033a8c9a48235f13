//! Banner Slide API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/banner-slides", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let read_routes = Router::new().route("/", get(handler::list));

    let admin_routes = Router::new()
        .route(
            "/",
            post(handler::create)
                .put(handler::update)
                .delete(handler::remove),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    read_routes.merge(admin_routes)
}
