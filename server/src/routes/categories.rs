//! Category routes.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use ootd_domain::{Category, CategoryDraft};

use crate::auth::AuthUser;
use crate::error::Result;
use crate::handlers::{handle_create_category, handle_list_categories};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/categories", get(list_handler).post(create_handler))
}

/// GET /categories
async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = handle_list_categories(state.store.as_ref()).await?;
    Ok(Json(categories))
}

/// POST /categories - Admins only.
async fn create_handler(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(draft): Json<CategoryDraft>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = handle_create_category(state.store.as_ref(), actor, draft).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
