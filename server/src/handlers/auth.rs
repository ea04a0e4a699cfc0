//! Registration and login.

use ootd_domain::{NewUser, Registration, Role, User};
use serde::{Deserialize, Serialize};

use crate::auth::{password, TokenKeys};
use crate::db::Store;
use crate::error::{AppError, Result};

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(alias = "passwd")]
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Validate a registration, hash the password and create a member account.
pub async fn handle_register(store: &dyn Store, registration: Registration) -> Result<User> {
    let registration = registration.normalized()?;

    let password_hash = password::hash(registration.password).await?;
    let user = store
        .insert_user(&NewUser {
            username: registration.username,
            email: registration.email,
            password_hash,
            profile_pic: None,
            role: Role::Member,
        })
        .await?;

    tracing::info!("Registered user {} ({})", user.username, user.user_id);
    Ok(user)
}

/// Check credentials and issue a bearer token.
pub async fn handle_login(
    store: &dyn Store,
    tokens: &TokenKeys,
    request: LoginRequest,
) -> Result<LoginResponse> {
    let credentials = store.find_credentials(&request.username).await?;
    let stored_hash = credentials.as_ref().map(|c| c.password_hash.clone());

    let verified = password::verify_login(request.password, stored_hash).await?;
    let credentials = match credentials {
        Some(credentials) if verified => credentials,
        _ => return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string())),
    };

    let token = tokens
        .issue(&credentials.user)
        .map_err(|e| AppError::Internal(format!("token signing failed: {}", e)))?;

    Ok(LoginResponse {
        token,
        user: credentials.user,
    })
}
