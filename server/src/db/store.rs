//! The data-access contract shared by every backend.

use async_trait::async_trait;
use ootd_domain::{
    Actor, Category, CategoryId, Credentials, DeleteOutcome, LikeToggle, NewPost, NewUser, PostId,
    PostView, User, UserId,
};

use super::StoreResult;

/// One method per business operation. Handlers receive a `dyn Store` so the
/// backing datastore can be swapped, e.g. for tests.
#[async_trait]
pub trait Store: Send + Sync {
    /// Check that the backing datastore answers.
    async fn ping(&self) -> StoreResult<()>;

    /// Every category.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Add a category.
    async fn insert_category(&self, name: &str) -> StoreResult<Category>;

    /// Feed, newest first; `liked` reflects `viewer`.
    async fn list_posts(&self, viewer: Option<UserId>) -> StoreResult<Vec<PostView>>;

    /// Posts of one category, newest first, without `liked`.
    async fn list_posts_by_category(&self, category: CategoryId) -> StoreResult<Vec<PostView>>;

    /// A single post with its like count.
    async fn get_post(&self, post_id: PostId) -> StoreResult<Option<PostView>>;

    /// Insert a post and return its id.
    async fn insert_post(&self, post: &NewPost) -> StoreResult<PostId>;

    /// Delete a post and its likes, atomically.
    async fn delete_post(&self, post_id: PostId, actor: Actor) -> StoreResult<DeleteOutcome>;

    /// Number of likes on a post.
    async fn count_likes(&self, post_id: PostId) -> StoreResult<i64>;

    /// Like the post if not yet liked by the user, otherwise unlike it.
    async fn toggle_like(&self, user_id: UserId, post_id: PostId) -> StoreResult<LikeToggle>;

    /// Register a user.
    async fn insert_user(&self, user: &NewUser) -> StoreResult<User>;

    /// Credentials for login.
    async fn find_credentials(&self, username: &str) -> StoreResult<Option<Credentials>>;
}
