//! Like counting and toggling.

use ootd_domain::{Actor, PostId};
use serde::Serialize;

use crate::db::Store;
use crate::error::Result;

/// Like total of a post.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCountResponse {
    pub post_id: PostId,
    pub likes: i64,
}

/// Result of a toggle: the new total and `1` when liked, `0` when unliked.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLikeResponse {
    pub post_id: PostId,
    pub likes: i64,
    pub liked: u8,
}

pub async fn handle_count_likes(store: &dyn Store, post_id: PostId) -> Result<LikeCountResponse> {
    let likes = store.count_likes(post_id).await?;
    Ok(LikeCountResponse { post_id, likes })
}

pub async fn handle_toggle_like(
    store: &dyn Store,
    actor: Actor,
    post_id: PostId,
) -> Result<ToggleLikeResponse> {
    let toggle = store.toggle_like(actor.user_id, post_id).await?;
    let (likes, liked) = toggle.as_pair();
    tracing::debug!(
        "User {} toggled like on post {}: {:?}",
        actor.user_id,
        post_id,
        toggle.outcome
    );
    Ok(ToggleLikeResponse {
        post_id,
        likes,
        liked,
    })
}
