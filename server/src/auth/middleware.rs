//! Authentication extractors.
//!
//! Requests carry `Authorization: Bearer <token>`; the token is verified
//! against the server's signing key.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use ootd_domain::Actor;

use crate::error::AppError;
use crate::AppState;

/// Authenticated user extracted from request.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Actor);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        match auth_header {
            Some(header) if header.starts_with("Bearer ") => {
                let token = header.trim_start_matches("Bearer ").trim();
                if token.is_empty() {
                    return Err(AppError::Unauthorized("Empty bearer token".to_string()));
                }

                state.tokens.verify(token).map(AuthUser).map_err(|e| {
                    tracing::debug!("Rejected bearer token: {}", e);
                    AppError::Unauthorized("Invalid or expired token".to_string())
                })
            }
            Some(_) => Err(AppError::Unauthorized(
                "Invalid authorization header format".to_string(),
            )),
            None => Err(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            )),
        }
    }
}

/// Optional authenticated user.
///
/// Absent credentials yield `None`; credentials that are present but invalid
/// are still rejected.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<Actor>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(OptionalAuthUser(None));
        }
        let AuthUser(actor) = AuthUser::from_request_parts(parts, state).await?;
        Ok(OptionalAuthUser(Some(actor)))
    }
}
