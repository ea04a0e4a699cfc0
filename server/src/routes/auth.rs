//! Registration and login routes.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use ootd_domain::{Registration, User};

use crate::error::Result;
use crate::handlers::{handle_login, handle_register, LoginRequest, LoginResponse};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
}

/// POST /auth/register - Create a member account.
async fn register_handler(
    State(state): State<AppState>,
    Json(registration): Json<Registration>,
) -> Result<(StatusCode, Json<User>)> {
    let user = handle_register(state.store.as_ref(), registration).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login - Exchange credentials for a bearer token.
async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let response = handle_login(state.store.as_ref(), &state.tokens, request).await?;
    Ok(Json(response))
}
