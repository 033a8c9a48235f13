//! Authentication Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::auth::password::{hash_password, verify_password, PasswordError};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::security_log;
use crate::utils::validation::{validate_email, validate_password, validate_required_text, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppJson, AppResult};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
use shared::models::{UserPublic, ROLE_USER};

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    AppJson(req): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_required_text(&req.username, "username", MAX_SHORT_TEXT_LEN)?;
    if req.password.is_empty() {
        return Err(AppError::validation("password is required"));
    }

    let username = req.username.trim();
    let Some(account) = user::find_by_username(&state.pool, username).await? else {
        // Same client response as a wrong password; only the log differs.
        security_log!("WARN", "login_unknown_user", username = username);
        return Err(AppError::invalid_credentials());
    };

    let valid = match verify_password(&req.password, &account.password) {
        Ok(valid) => valid,
        Err(PasswordError::Format) | Err(PasswordError::SaltEncoding) => {
            security_log!("ERROR", "login_corrupt_password", username = username);
            return Err(AppError::password_format());
        }
        Err(PasswordError::Derivation(e)) => {
            return Err(AppError::internal(format!(
                "Password verification failed: {e}"
            )));
        }
    };
    if !valid {
        security_log!("WARN", "login_wrong_password", username = username);
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(account.id, &account.username, &account.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(username = %account.username, "User logged in");

    Ok(Json(LoginResponse {
        id: account.id,
        username: account.username,
        email: account.email,
        role: account.role,
        token,
    }))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserPublic>)> {
    validate_required_text(&req.username, "username", MAX_SHORT_TEXT_LEN)?;
    validate_email(&req.email)?;
    validate_password(&req.password)?;

    let password_hash = hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    let created = user::create(
        &state.pool,
        req.username.trim(),
        req.email.trim(),
        &password_hash,
        ROLE_USER,
    )
    .await?;

    tracing::info!(username = %created.username, "User registered");

    Ok((StatusCode::CREATED, Json(created.public())))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<UserPublic>> {
    let account = user::find_by_id(&state.pool, current_user.id)
        .await?
        .ok_or_else(AppError::unauthorized)?;
    Ok(Json(account.public()))
}
