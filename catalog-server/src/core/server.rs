//! Server implementation
//!
//! Router composition and the HTTP listen loop.

use std::net::SocketAddr;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::core::error::{Result, ServerError};
use crate::core::{Config, ServerState};

/// HTTP request logging middleware
async fn log_request(
    request: axum::extract::Request,
    next: middleware::Next,
) -> axum::response::Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// CORS: any origin, fixed method and header allow-lists.
fn cors_layer() -> CorsLayer {
    use axum::http::{Method, header};
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Build the full application router with middleware applied.
///
/// Shared between [`Server::run`] and the integration tests, which drive
/// the router directly without binding a socket.
pub fn build_app(state: &ServerState) -> Router {
    Router::new()
        // Core
        .merge(crate::api::auth::router())
        .merge(crate::api::health::router())
        .merge(crate::api::upload::router(state))
        .merge(crate::api::images::router())
        // Catalog
        .merge(crate::api::cars::router(state))
        .merge(crate::api::brands::router(state))
        .merge(crate::api::car_models::router(state))
        .merge(crate::api::colors::router(state))
        .merge(crate::api::statuses::router(state))
        // Homepage curation
        .merge(crate::api::banner_slides::router(state))
        .merge(crate::api::banner_images::router(state))
        .merge(crate::api::homepage_cars::router(state))
        .with_state(state.clone())
        .layer(cors_layer())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// HTTP server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create a server with an already-initialized state.
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Run until ctrl-c.
    pub async fn run(&self) -> Result<()> {
        let state = match &self.state {
            Some(state) => state.clone(),
            None => ServerState::initialize(&self.config)
                .await
                .map_err(|e| ServerError::Startup(e.to_string()))?,
        };

        let app = build_app(&state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("LuxCars catalog server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
