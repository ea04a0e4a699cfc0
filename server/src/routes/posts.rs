//! Post and like routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use ootd_domain::{CategoryId, DeleteOutcome, PostDraft, PostId, PostView};

use crate::auth::{AuthUser, OptionalAuthUser};
use crate::error::Result;
use crate::handlers::{
    handle_count_likes, handle_create_post, handle_delete_post, handle_get_post,
    handle_list_by_category, handle_list_feed, handle_toggle_like, CreatePostResponse,
    LikeCountResponse, ToggleLikeResponse,
};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(feed_handler).post(create_handler))
        .route("/posts/category/{category_id}", get(by_category_handler))
        .route("/posts/{post_id}", get(get_handler).delete(delete_handler))
        .route(
            "/posts/{post_id}/likes",
            get(count_likes_handler).post(toggle_like_handler),
        )
}

/// GET /posts - Feed, newest first.
async fn feed_handler(
    State(state): State<AppState>,
    OptionalAuthUser(viewer): OptionalAuthUser,
) -> Result<Json<Vec<PostView>>> {
    let posts = handle_list_feed(state.store.as_ref(), viewer).await?;
    Ok(Json(posts))
}

/// POST /posts - Publish a post.
async fn create_handler(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(draft): Json<PostDraft>,
) -> Result<(StatusCode, Json<CreatePostResponse>)> {
    let response = handle_create_post(state.store.as_ref(), actor, draft).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /posts/category/{category_id}
async fn by_category_handler(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> Result<Json<Vec<PostView>>> {
    let posts = handle_list_by_category(state.store.as_ref(), category_id).await?;
    Ok(Json(posts))
}

/// GET /posts/{post_id}
async fn get_handler(
    State(state): State<AppState>,
    Path(post_id): Path<PostId>,
) -> Result<Json<PostView>> {
    let post = handle_get_post(state.store.as_ref(), post_id).await?;
    Ok(Json(post))
}

/// DELETE /posts/{post_id}
async fn delete_handler(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(post_id): Path<PostId>,
) -> Result<Json<DeleteOutcome>> {
    let outcome = handle_delete_post(state.store.as_ref(), actor, post_id).await?;
    Ok(Json(outcome))
}

/// GET /posts/{post_id}/likes
async fn count_likes_handler(
    State(state): State<AppState>,
    Path(post_id): Path<PostId>,
) -> Result<Json<LikeCountResponse>> {
    let response = handle_count_likes(state.store.as_ref(), post_id).await?;
    Ok(Json(response))
}

/// POST /posts/{post_id}/likes - Toggle the caller's like.
async fn toggle_like_handler(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(post_id): Path<PostId>,
) -> Result<Json<ToggleLikeResponse>> {
    let response = handle_toggle_like(state.store.as_ref(), actor, post_id).await?;
    Ok(Json(response))
}
