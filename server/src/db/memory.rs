//! In-process [`Store`] holding every table behind one lock.
//!
//! Each operation takes the lock once, so multi-step operations (delete,
//! toggle) are atomic just like their transactional PostgreSQL versions.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ootd_domain::{
    Actor, Category, CategoryId, Credentials, DeleteOutcome, LikeOutcome, LikeToggle, NewPost,
    NewUser, PostId, PostOwner, PostView, User, UserId,
};

use super::{Store, StoreError, StoreResult};

#[derive(Debug)]
struct PostRow {
    owner: UserId,
    image: String,
    description: String,
    category: CategoryId,
    upload_time: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, Credentials>,
    categories: BTreeMap<CategoryId, Category>,
    posts: BTreeMap<PostId, PostRow>,
    /// (post, user) pairs.
    likes: BTreeSet<(PostId, UserId)>,
    next_user: UserId,
    next_category: CategoryId,
    next_post: PostId,
}

impl Tables {
    fn like_count(&self, post_id: PostId) -> i64 {
        self.likes
            .range((post_id, UserId::MIN)..=(post_id, UserId::MAX))
            .count() as i64
    }

    fn liked_by(&self, post_id: PostId, viewer: Option<UserId>) -> bool {
        viewer.is_some_and(|user_id| self.likes.contains(&(post_id, user_id)))
    }

    fn view(&self, post_id: PostId, post: &PostRow, liked: Option<bool>) -> Option<PostView> {
        let owner = &self.users.get(&post.owner)?.user;
        let category = self.categories.get(&post.category)?.clone();

        Some(PostView {
            post_id,
            owner: PostOwner {
                user_id: owner.user_id,
                username: owner.username.clone(),
                profile_pic: owner.profile_pic.clone(),
            },
            image: post.image.clone(),
            description: post.description.clone(),
            category,
            likes: self.like_count(post_id),
            liked,
            upload_time: post.upload_time,
        })
    }

    /// Posts matching `filter`, newest first.
    fn views<F>(&self, filter: F, viewer: Option<Option<UserId>>) -> Vec<PostView>
    where
        F: Fn(&PostRow) -> bool,
    {
        let mut views: Vec<PostView> = self
            .posts
            .iter()
            .filter(|(_, post)| filter(post))
            .filter_map(|(&post_id, post)| {
                let liked = viewer.map(|v| self.liked_by(post_id, v));
                self.view(post_id, post, liked)
            })
            .collect();

        views.sort_by_key(|v| Reverse((v.upload_time, v.post_id)));
        views
    }
}

/// Store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.tables().categories.values().cloned().collect())
    }

    async fn insert_category(&self, name: &str) -> StoreResult<Category> {
        let mut tables = self.tables();
        if tables.categories.values().any(|c| c.name == name) {
            return Err(StoreError::Duplicate("category"));
        }

        tables.next_category += 1;
        let category = Category::new(tables.next_category, name);
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn list_posts(&self, viewer: Option<UserId>) -> StoreResult<Vec<PostView>> {
        Ok(self.tables().views(|_| true, Some(viewer)))
    }

    async fn list_posts_by_category(&self, category: CategoryId) -> StoreResult<Vec<PostView>> {
        Ok(self.tables().views(|post| post.category == category, None))
    }

    async fn get_post(&self, post_id: PostId) -> StoreResult<Option<PostView>> {
        let tables = self.tables();
        Ok(tables
            .posts
            .get(&post_id)
            .and_then(|post| tables.view(post_id, post, None)))
    }

    async fn insert_post(&self, post: &NewPost) -> StoreResult<PostId> {
        let mut tables = self.tables();
        if !tables.users.contains_key(&post.owner) {
            return Err(StoreError::NotFound("user"));
        }
        if !tables.categories.contains_key(&post.category) {
            return Err(StoreError::NotFound("category"));
        }

        tables.next_post += 1;
        let post_id = tables.next_post;
        tables.posts.insert(
            post_id,
            PostRow {
                owner: post.owner,
                image: post.image.clone(),
                description: post.description.clone(),
                category: post.category,
                upload_time: Utc::now(),
            },
        );
        Ok(post_id)
    }

    async fn delete_post(&self, post_id: PostId, actor: Actor) -> StoreResult<DeleteOutcome> {
        let mut tables = self.tables();
        let Some(owner) = tables.posts.get(&post_id).map(|p| p.owner) else {
            return Ok(DeleteOutcome::nothing());
        };
        if !actor.may_delete_post_of(owner) {
            return Ok(DeleteOutcome::nothing());
        }

        let before = tables.likes.len();
        tables.likes.retain(|&(post, _)| post != post_id);
        let likes_removed = (before - tables.likes.len()) as u64;
        tables.posts.remove(&post_id);

        Ok(DeleteOutcome {
            likes_removed,
            post_removed: true,
        })
    }

    async fn count_likes(&self, post_id: PostId) -> StoreResult<i64> {
        Ok(self.tables().like_count(post_id))
    }

    async fn toggle_like(&self, user_id: UserId, post_id: PostId) -> StoreResult<LikeToggle> {
        let mut tables = self.tables();
        if !tables.posts.contains_key(&post_id) {
            return Err(StoreError::NotFound("post"));
        }

        let outcome = if tables.likes.remove(&(post_id, user_id)) {
            LikeOutcome::Unliked
        } else {
            if !tables.users.contains_key(&user_id) {
                return Err(StoreError::NotFound("user"));
            }
            tables.likes.insert((post_id, user_id));
            LikeOutcome::Liked
        };

        Ok(LikeToggle::new(tables.like_count(post_id), outcome))
    }

    async fn insert_user(&self, user: &NewUser) -> StoreResult<User> {
        let mut tables = self.tables();
        for existing in tables.users.values() {
            if existing.user.username == user.username {
                return Err(StoreError::Duplicate("username"));
            }
            if existing.user.email.to_lowercase() == user.email.to_lowercase() {
                return Err(StoreError::Duplicate("email"));
            }
        }

        tables.next_user += 1;
        let created = User {
            user_id: tables.next_user,
            username: user.username.clone(),
            email: user.email.clone(),
            profile_pic: user.profile_pic.clone(),
            role: user.role,
        };
        tables.users.insert(
            created.user_id,
            Credentials {
                user: created.clone(),
                password_hash: user.password_hash.clone(),
            },
        );
        Ok(created)
    }

    async fn find_credentials(&self, username: &str) -> StoreResult<Option<Credentials>> {
        Ok(self
            .tables()
            .users
            .values()
            .find(|c| c.user.username == username)
            .cloned())
    }
}
