//! HTTP route definitions.

mod auth;
mod categories;
mod health;
mod posts;

use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(categories::routes())
        .merge(posts::routes())
}
