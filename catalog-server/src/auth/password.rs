//! Password hashing
//!
//! One scheme everywhere (registration, admin seed, verification):
//!
//! ```text
//! stored = hex(argon2id(password, salt)) + ":" + hex(salt)
//! ```
//!
//! Verification splits on `:`, recomputes the digest with the stored
//! salt, and compares the hex strings. A stored value without the
//! separator is corrupted data, not a failed login, and surfaces as a
//! distinct error.

use argon2::Argon2;
use rand::Rng;
use thiserror::Error;

/// Derived key length in bytes
const HASH_LEN: usize = 32;
/// Salt length in bytes
const SALT_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("stored password value is not in hash:salt format")]
    Format,

    #[error("stored salt is not valid hex")]
    SaltEncoding,

    #[error("key derivation failed: {0}")]
    Derivation(String),
}

fn derive(password: &str, salt: &[u8]) -> Result<[u8; HASH_LEN], PasswordError> {
    let mut output = [0u8; HASH_LEN];
    Argon2::default()
        .hash_password_into(password.as_bytes(), salt, &mut output)
        .map_err(|e| PasswordError::Derivation(e.to_string()))?;
    Ok(output)
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill(&mut salt[..]);
    let digest = derive(password, &salt)?;
    Ok(format!("{}:{}", hex::encode(digest), hex::encode(salt)))
}

/// Verify a plaintext password against a stored `hash:salt` value.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, PasswordError> {
    let (stored_hash, salt_hex) = stored.split_once(':').ok_or(PasswordError::Format)?;
    let salt = hex::decode(salt_hex).map_err(|_| PasswordError::SaltEncoding)?;
    let digest = derive(password, &salt)?;
    Ok(hex::encode(digest) == stored_hash)
}
