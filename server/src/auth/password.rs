//! Argon2 password hashing.
//!
//! Hashing is CPU-bound, so both calls run on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::sync::OnceCell;

use crate::error::{AppError, Result};

/// Hash checked in place of a real one when a login names no known user.
static UNKNOWN_USER_HASH: OnceCell<String> = OnceCell::const_new();

/// Hash a password into a PHC string.
pub async fn hash(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
}

/// Check a password against a stored PHC string.
///
/// A malformed stored hash never verifies.
pub async fn verify(password: String, stored_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&stored_hash) else {
            tracing::warn!("Stored password hash is malformed");
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))
}

/// Check a login password against the stored hash of the named user.
///
/// Without a stored hash the password is still checked against a throwaway
/// hash, so an unknown username costs one Argon2 verify like a wrong password.
pub async fn verify_login(password: String, stored_hash: Option<String>) -> Result<bool> {
    match stored_hash {
        Some(stored_hash) => verify(password, stored_hash).await,
        None => {
            verify(password, unknown_user_hash().await?).await?;
            Ok(false)
        }
    }
}

async fn unknown_user_hash() -> Result<String> {
    UNKNOWN_USER_HASH
        .get_or_try_init(|| hash("unknown-user".to_string()))
        .await
        .cloned()
}
