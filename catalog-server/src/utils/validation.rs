//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by
//! every entity handler, so field checks stay identical across routes.
//! SQLite TEXT has no built-in length enforcement.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: car, brand, model, color, status, slide title, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Rich HTML car descriptions
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

/// Short identifiers: scale, usernames, RGB codes, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a price string: must parse as a non-negative decimal.
pub fn validate_price(value: &str) -> Result<(), AppError> {
    let parsed = Decimal::from_str(value.trim())
        .map_err(|_| AppError::validation("price must be a decimal number"))?;
    if parsed.is_sign_negative() {
        return Err(AppError::validation("price must not be negative"));
    }
    Ok(())
}

/// Validate a `#RRGGBB` color code.
pub fn validate_rgb(value: &str) -> Result<(), AppError> {
    match value.strip_prefix('#') {
        Some(digits) if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) => {
            Ok(())
        }
        _ => Err(AppError::validation("rgb must be a #RRGGBB color code")),
    }
}

/// Minimal email shape check; full RFC validation is not the goal.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let Some((local, domain)) = value.split_once('@') else {
        return Err(AppError::validation("email must contain '@'"));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation("email is not a valid address"));
    }
    Ok(())
}

/// Validate a plaintext password at registration time.
pub fn validate_password(value: &str) -> Result<(), AppError> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if value.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN} chars)"
        )));
    }
    Ok(())
}
