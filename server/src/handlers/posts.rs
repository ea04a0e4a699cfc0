//! Post feed, lookup, creation and deletion.

use ootd_domain::{Actor, CategoryId, DeleteOutcome, PostDraft, PostId, PostView};
use serde::Serialize;

use crate::db::Store;
use crate::error::{AppError, Result};

/// Response for post creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub post_id: PostId,
}

/// The feed as seen by `viewer` (anonymous when `None`).
pub async fn handle_list_feed(store: &dyn Store, viewer: Option<Actor>) -> Result<Vec<PostView>> {
    Ok(store.list_posts(viewer.map(|a| a.user_id)).await?)
}

pub async fn handle_list_by_category(
    store: &dyn Store,
    category: CategoryId,
) -> Result<Vec<PostView>> {
    Ok(store.list_posts_by_category(category).await?)
}

pub async fn handle_get_post(store: &dyn Store, post_id: PostId) -> Result<PostView> {
    store
        .get_post(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))
}

/// Validate a draft and publish it under the actor's account.
pub async fn handle_create_post(
    store: &dyn Store,
    actor: Actor,
    draft: PostDraft,
) -> Result<CreatePostResponse> {
    let post = draft.into_new_post(actor.user_id)?;
    let post_id = store.insert_post(&post).await?;
    tracing::info!("User {} created post {}", actor.user_id, post_id);
    Ok(CreatePostResponse { post_id })
}

/// Delete a post with its likes.
///
/// Members can only delete their own posts; anything else reads as not found.
pub async fn handle_delete_post(
    store: &dyn Store,
    actor: Actor,
    post_id: PostId,
) -> Result<DeleteOutcome> {
    let outcome = store.delete_post(post_id, actor).await?;
    if !outcome.post_removed {
        return Err(AppError::NotFound(format!("Post {} not found", post_id)));
    }

    tracing::info!(
        "User {} deleted post {} ({} likes removed)",
        actor.user_id,
        post_id,
        outcome.likes_removed
    );
    Ok(outcome)
}
