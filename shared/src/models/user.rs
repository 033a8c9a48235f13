//! User model

use serde::{Deserialize, Serialize};

/// Elevated role required for catalog mutations.
pub const ROLE_ADMIN: &str = "ADMIN";
/// Default role assigned at registration.
pub const ROLE_USER: &str = "USER";

/// User row.
///
/// `password` holds `hex(hash):hex(salt)` and never leaves the server;
/// this type is not serializable on purpose.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    /// Client-facing view without the credential field.
    pub fn public(&self) -> UserPublic {
        UserPublic {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Public user fields, safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}
