//! Login, registration and current-user endpoint behavior.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{read_json, spawn_app, ADMIN_PASSWORD, ADMIN_USERNAME};

#[tokio::test]
async fn login_returns_profile_and_usable_token() {
    let app = spawn_app().await;

    let response = app
        .send_json(
            "POST",
            "/api/auth/login",
            json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["username"], ADMIN_USERNAME);
    assert_eq!(body["role"], "ADMIN");
    assert!(body["id"].as_i64().is_some());
    let token = body["token"].as_str().unwrap().to_string();

    let me = app
        .send_json("GET", "/api/auth/me", json!({}), Some(&token))
        .await;
    assert_eq!(me.status(), StatusCode::OK);
    let me_body = read_json(me).await;
    assert_eq!(me_body["username"], ADMIN_USERNAME);
    assert_eq!(me_body["role"], "ADMIN");
    // The stored hash must never appear in a response
    assert!(me_body.get("password").is_none());
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_indistinguishable() {
    let app = spawn_app().await;

    let wrong_password = app
        .send_json(
            "POST",
            "/api/auth/login",
            json!({"username": ADMIN_USERNAME, "password": "not-the-password"}),
            None,
        )
        .await;
    let unknown_user = app
        .send_json(
            "POST",
            "/api/auth/login",
            json!({"username": "nobody-here", "password": "whatever"}),
            None,
        )
        .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let body_a = read_json(wrong_password).await;
    let body_b = read_json(unknown_user).await;
    assert_eq!(body_a, body_b, "login failures must not reveal which part was wrong");
    assert_eq!(body_a["error"], "invalid_credentials");
}

#[tokio::test]
async fn corrupt_stored_password_is_a_server_error() {
    let app = spawn_app().await;

    // Break the stored hash behind the repository's back
    sqlx::query("UPDATE user SET password = 'not-a-hash-salt-pair' WHERE username = ?")
        .bind(ADMIN_USERNAME)
        .execute(&app.state.pool)
        .await
        .unwrap();

    let response = app
        .send_json(
            "POST",
            "/api/auth/login",
            json!({"username": ADMIN_USERNAME, "password": ADMIN_PASSWORD}),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["error"], "password_format");
    // The body explains nothing about the stored value
    assert_eq!(body["message"], "Stored credentials are corrupted");
}

#[tokio::test]
async fn registration_rejects_taken_username_and_email() {
    let app = spawn_app().await;

    let first = app
        .send_json(
            "POST",
            "/api/auth/register",
            json!({"username": "collector", "email": "collector@example.com", "password": "secret99"}),
            None,
        )
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let created = read_json(first).await;
    assert_eq!(created["username"], "collector");
    assert_eq!(created["role"], "USER");
    assert!(created.get("password").is_none());

    let same_username = app
        .send_json(
            "POST",
            "/api/auth/register",
            json!({"username": "collector", "email": "other@example.com", "password": "secret99"}),
            None,
        )
        .await;
    assert_eq!(same_username.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(same_username).await["error"], "conflict");

    let same_email = app
        .send_json(
            "POST",
            "/api/auth/register",
            json!({"username": "collector2", "email": "collector@example.com", "password": "secret99"}),
            None,
        )
        .await;
    assert_eq!(same_email.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(same_email).await["error"], "conflict");
}

#[tokio::test]
async fn registration_validates_inputs() {
    let app = spawn_app().await;

    // Bad email
    let bad_email = app
        .send_json(
            "POST",
            "/api/auth/register",
            json!({"username": "x1", "email": "not-an-email", "password": "secret99"}),
            None,
        )
        .await;
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(bad_email).await["error"], "validation_error");

    // Password too short
    let short_password = app
        .send_json(
            "POST",
            "/api/auth/register",
            json!({"username": "x2", "email": "x2@example.com", "password": "abc"}),
            None,
        )
        .await;
    assert_eq!(short_password.status(), StatusCode::BAD_REQUEST);

    // Missing field entirely: body fails to deserialize, still a 400
    let missing_field = app
        .send_json(
            "POST",
            "/api/auth/register",
            json!({"username": "x3", "password": "secret99"}),
            None,
        )
        .await;
    assert_eq!(missing_field.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(missing_field).await["error"], "validation_error");
}

#[tokio::test]
async fn me_requires_a_valid_token() {
    let app = spawn_app().await;

    let no_token = app.get("/api/auth/me").await;
    assert_eq!(no_token.status(), StatusCode::UNAUTHORIZED);

    let garbage = app
        .send_json("GET", "/api/auth/me", json!({}), Some("garbage.token.here"))
        .await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(garbage).await["error"], "invalid_token");
}
