//! Posts: creation input, display rows, and deletion results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{Category, CategoryId, Error, PostId, Result, UserId};

/// Post fields submitted by a client. The owner comes from authentication.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Stored image filename.
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub image: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: String,

    pub category: CategoryId,
}

impl PostDraft {
    /// Validate the draft and attach its owner.
    pub fn into_new_post(self, owner: UserId) -> Result<NewPost> {
        self.validate().map_err(|e| Error::from_validation(&e))?;
        Ok(NewPost {
            owner,
            image: self.image,
            description: self.description,
            category: self.category,
        })
    }
}

/// A validated post ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub owner: UserId,
    pub image: String,
    pub description: String,
    pub category: CategoryId,
}

/// Owner identity shown alongside a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOwner {
    pub user_id: UserId,
    pub username: String,
    pub profile_pic: Option<String>,
}

/// A post joined with its owner, category and like data.
///
/// `liked` is only present on the main feed, where a viewer is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub post_id: PostId,
    pub owner: PostOwner,
    pub image: String,
    pub description: String,
    pub category: Category,
    pub likes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
    pub upload_time: DateTime<Utc>,
}

/// What a post deletion removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub likes_removed: u64,
    pub post_removed: bool,
}

impl DeleteOutcome {
    /// Nothing was removed: the post is absent or the actor may not delete it.
    pub fn nothing() -> Self {
        Self::default()
    }
}
