//! Database operations for the post_likes table.

use ootd_domain::{LikeOutcome, LikeToggle, PostId, UserId};
use sqlx::PgPool;

use super::{StoreError, StoreResult};

/// Count the likes of a post. Unknown posts have none.
pub async fn count_likes(pool: &PgPool, post_id: PostId) -> StoreResult<i64> {
    let result: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM post_likes WHERE post_id = $1"#)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(result.0)
}

/// Flip the like of `user_id` on `post_id` and recount.
///
/// Runs in one transaction holding the post row lock, so concurrent toggles
/// on the same post apply one after another.
pub async fn toggle_like(
    pool: &PgPool,
    user_id: UserId,
    post_id: PostId,
) -> StoreResult<LikeToggle> {
    let mut tx = pool.begin().await?;

    let post: Option<(i32,)> =
        sqlx::query_as(r#"SELECT post_id FROM posts WHERE post_id = $1 FOR UPDATE"#)
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;
    if post.is_none() {
        return Err(StoreError::NotFound("post"));
    }

    let removed = sqlx::query(r#"DELETE FROM post_likes WHERE user_id = $1 AND post_id = $2"#)
        .bind(user_id)
        .bind(post_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let outcome = if removed == 0 {
        sqlx::query(r#"INSERT INTO post_likes (user_id, post_id) VALUES ($1, $2)"#)
            .bind(user_id)
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::from_sqlx)?;
        LikeOutcome::Liked
    } else {
        LikeOutcome::Unliked
    };

    let total: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM post_likes WHERE post_id = $1"#)
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(LikeToggle::new(total.0, outcome))
}
