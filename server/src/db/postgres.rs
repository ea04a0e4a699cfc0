//! PostgreSQL-backed [`Store`].

use async_trait::async_trait;
use ootd_domain::{
    Actor, Category, CategoryId, Credentials, DeleteOutcome, LikeToggle, NewPost, NewUser, PostId,
    PostView, User, UserId,
};

use super::{Pool, Store, StoreResult};

/// Store over a shared connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(super::ping(&self.pool).await?)
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        super::list_categories(&self.pool).await
    }

    async fn insert_category(&self, name: &str) -> StoreResult<Category> {
        super::insert_category(&self.pool, name).await
    }

    async fn list_posts(&self, viewer: Option<UserId>) -> StoreResult<Vec<PostView>> {
        super::list_posts(&self.pool, viewer).await
    }

    async fn list_posts_by_category(&self, category: CategoryId) -> StoreResult<Vec<PostView>> {
        super::list_posts_by_category(&self.pool, category).await
    }

    async fn get_post(&self, post_id: PostId) -> StoreResult<Option<PostView>> {
        super::get_post(&self.pool, post_id).await
    }

    async fn insert_post(&self, post: &NewPost) -> StoreResult<PostId> {
        super::insert_post(&self.pool, post).await
    }

    async fn delete_post(&self, post_id: PostId, actor: Actor) -> StoreResult<DeleteOutcome> {
        super::delete_post(&self.pool, post_id, actor).await
    }

    async fn count_likes(&self, post_id: PostId) -> StoreResult<i64> {
        super::count_likes(&self.pool, post_id).await
    }

    async fn toggle_like(&self, user_id: UserId, post_id: PostId) -> StoreResult<LikeToggle> {
        super::toggle_like(&self.pool, user_id, post_id).await
    }

    async fn insert_user(&self, user: &NewUser) -> StoreResult<User> {
        super::insert_user(&self.pool, user).await
    }

    async fn find_credentials(&self, username: &str) -> StoreResult<Option<Credentials>> {
        super::find_credentials(&self.pool, username).await
    }
}
