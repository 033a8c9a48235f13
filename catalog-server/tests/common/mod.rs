//! Shared harness for API integration tests.
//!
//! Each test gets an isolated server: fresh temp work dir, fresh
//! SQLite file, seeded admin account. Requests are driven through the
//! router with `tower::ServiceExt::oneshot`, no socket involved.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use catalog_server::{Config, ServerState, build_app};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test-admin-password";

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    _work_dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let work_dir = TempDir::new().expect("temp work dir");

    let mut config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    // Empty base keeps stored image URLs root-relative, so tests can GET them directly
    config.public_base_url = String::new();
    config.environment = "development".to_string();
    config.jwt.secret = "integration-test-secret-0123456789abcdef".to_string();
    config.admin_username = ADMIN_USERNAME.to_string();
    config.admin_password = ADMIN_PASSWORD.to_string();
    config.admin_email = "admin@test.local".to_string();

    let state = ServerState::initialize(&config)
        .await
        .expect("server state");
    let app = build_app(&state);

    TestApp {
        app,
        state,
        _work_dir: work_dir,
    }
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("infallible router call")
    }

    /// Plain GET without auth.
    pub async fn get(&self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.request(request).await
    }

    /// JSON request with an optional bearer token.
    pub async fn send_json(
        &self,
        method: &str,
        path: &str,
        body: Value,
        token: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.request(request).await
    }

    /// Log in as the seeded admin and return the bearer token.
    pub async fn admin_token(&self) -> String {
        let response = self
            .send_json(
                "POST",
                "/api/auth/login",
                json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK, "admin login failed");
        let body = read_json(response).await;
        body["token"].as_str().expect("token in response").to_string()
    }

    /// Create one brand, model, color and status; returns their ids.
    pub async fn seed_lookups(&self, token: &str) -> (i64, i64, i64, i64) {
        let brand = self
            .create_entity("/api/brands", json!({"name": "Porsche"}), token)
            .await;
        let model = self
            .create_entity("/api/models", json!({"name": "911 GT3"}), token)
            .await;
        let color = self
            .create_entity(
                "/api/colors",
                json!({"name": "Guards Red", "rgb": "#D5001C"}),
                token,
            )
            .await;
        let status = self
            .create_entity("/api/status", json!({"name": "In Stock"}), token)
            .await;
        (brand, model, color, status)
    }

    /// POST a create payload, assert 201, return the new id.
    pub async fn create_entity(&self, path: &str, body: Value, token: &str) -> i64 {
        let response = self.send_json("POST", path, body, Some(token)).await;
        assert_eq!(
            response.status(),
            StatusCode::CREATED,
            "create at {path} failed"
        );
        let body = read_json(response).await;
        body["id"].as_i64().expect("id in create response")
    }

    /// Create a car against the given lookup ids, returning its id.
    pub async fn create_car(
        &self,
        token: &str,
        name: &str,
        price: &str,
        refs: (i64, i64, i64, i64),
    ) -> i64 {
        let (brand_id, model_id, color_id, status_id) = refs;
        self.create_entity(
            "/api/cars",
            json!({
                "name": name,
                "price": price,
                "scale": "1:18",
                "brandId": brand_id,
                "modelId": model_id,
                "colorId": color_id,
                "statusId": status_id,
            }),
            token,
        )
        .await
    }
}

/// Collect a response body as JSON.
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("valid JSON body")
}
