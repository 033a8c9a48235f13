//! Startup seeding
//!
//! Guarantees at least one admin account exists so a fresh install can
//! log into the admin panel.

use sqlx::SqlitePool;

use crate::auth::password::hash_password;
use crate::core::Config;
use crate::db::repository::user;
use crate::utils::AppError;
use shared::models::ROLE_ADMIN;

/// Create the configured admin account unless an admin already exists.
pub async fn ensure_admin(pool: &SqlitePool, config: &Config) -> Result<(), AppError> {
    if user::count_admins(pool).await? > 0 {
        return Ok(());
    }

    let password_hash = hash_password(&config.admin_password)
        .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

    let created = user::create(
        pool,
        &config.admin_username,
        &config.admin_email,
        &password_hash,
        ROLE_ADMIN,
    )
    .await?;

    tracing::info!(username = %created.username, "Seeded admin user");
    Ok(())
}
