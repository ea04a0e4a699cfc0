//! Database operations for the posts table.

use ootd_domain::{Actor, CategoryId, DeleteOutcome, NewPost, PostId, PostView, UserId};
use sqlx::PgPool;

use super::rows::StoredPost;
use super::{StoreError, StoreResult};

/// Build a post query: owner, category and like count per post, with the
/// given `liked` expression and trailing clauses.
macro_rules! post_query {
    ($liked:literal, $filter:literal) => {
        concat!(
            "SELECT p.post_id, u.user_id, u.username, u.profile_pic, p.image, p.description, ",
            "c.cid, c.category, COUNT(l.post_id) AS likes, ",
            $liked,
            " AS liked, p.upload_time ",
            "FROM posts p ",
            "JOIN users u ON u.user_id = p.user_id ",
            "JOIN categories c ON c.cid = p.category ",
            "LEFT JOIN post_likes l ON l.post_id = p.post_id ",
            $filter,
            " GROUP BY p.post_id, u.user_id, c.cid ",
            "ORDER BY p.upload_time DESC, p.post_id DESC"
        )
    };
}

/// Get the feed, newest first, flagging posts the viewer has liked.
///
/// An anonymous viewer has liked nothing.
pub async fn list_posts(pool: &PgPool, viewer: Option<UserId>) -> StoreResult<Vec<PostView>> {
    let rows = sqlx::query_as::<_, StoredPost>(post_query!(
        "EXISTS (SELECT 1 FROM post_likes v WHERE v.user_id = $1 AND v.post_id = p.post_id)",
        ""
    ))
    .bind(viewer)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(PostView::from).collect())
}

/// Get the posts of one category, newest first.
pub async fn list_posts_by_category(
    pool: &PgPool,
    category: CategoryId,
) -> StoreResult<Vec<PostView>> {
    let sql = post_query!("NULL::BOOLEAN", "WHERE p.category = $1");
    let rows = sqlx::query_as::<_, StoredPost>(sql)
        .bind(category)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(PostView::from).collect())
}

/// Get a single post, including posts nobody has liked.
pub async fn get_post(pool: &PgPool, post_id: PostId) -> StoreResult<Option<PostView>> {
    let sql = post_query!("NULL::BOOLEAN", "WHERE p.post_id = $1");
    let row = sqlx::query_as::<_, StoredPost>(sql)
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(PostView::from))
}

/// Insert a post; the datastore stamps `upload_time`.
pub async fn insert_post(pool: &PgPool, post: &NewPost) -> StoreResult<PostId> {
    let result: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO posts (user_id, image, description, category)
        VALUES ($1, $2, $3, $4)
        RETURNING post_id
        "#,
    )
    .bind(post.owner)
    .bind(&post.image)
    .bind(&post.description)
    .bind(post.category)
    .fetch_one(pool)
    .await
    .map_err(StoreError::from_sqlx)?;

    Ok(result.0)
}

/// Delete a post and its likes in one transaction.
///
/// The post row is locked first so no like can be added between the two
/// deletes. Members may only delete their own posts; admins any post. When
/// the post is absent or not deletable by `actor` nothing is changed.
pub async fn delete_post(
    pool: &PgPool,
    post_id: PostId,
    actor: Actor,
) -> StoreResult<DeleteOutcome> {
    let mut tx = pool.begin().await?;

    let owner: Option<(i32,)> =
        sqlx::query_as(r#"SELECT user_id FROM posts WHERE post_id = $1 FOR UPDATE"#)
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;

    let Some((owner,)) = owner else {
        tx.rollback().await?;
        return Ok(DeleteOutcome::nothing());
    };

    if !actor.may_delete_post_of(owner) {
        tx.rollback().await?;
        return Ok(DeleteOutcome::nothing());
    }

    let likes_removed = sqlx::query(r#"DELETE FROM post_likes WHERE post_id = $1"#)
        .bind(post_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let posts_removed = sqlx::query(r#"DELETE FROM posts WHERE post_id = $1"#)
        .bind(post_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    Ok(DeleteOutcome {
        likes_removed,
        post_removed: posts_removed == 1,
    })
}
