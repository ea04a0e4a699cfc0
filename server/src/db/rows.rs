//! Row decoding from PostgreSQL result sets.

use chrono::{DateTime, Utc};
use ootd_domain::{Category, Credentials, PostOwner, PostView, Role, User};
use sqlx::{postgres::PgRow, Row};

/// A category row.
#[derive(Debug)]
pub struct StoredCategory {
    pub cid: i32,
    pub category: String,
}

impl<'r> sqlx::FromRow<'r, PgRow> for StoredCategory {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(StoredCategory {
            cid: row.try_get("cid")?,
            category: row.try_get("category")?,
        })
    }
}

impl From<StoredCategory> for Category {
    fn from(row: StoredCategory) -> Self {
        Category::new(row.cid, row.category)
    }
}

/// A post joined with owner, category and like aggregates.
#[derive(Debug)]
pub struct StoredPost {
    pub post_id: i32,
    pub user_id: i32,
    pub username: String,
    pub profile_pic: Option<String>,
    pub image: String,
    pub description: String,
    pub cid: i32,
    pub category: String,
    pub likes: i64,
    pub liked: Option<bool>,
    pub upload_time: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, PgRow> for StoredPost {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(StoredPost {
            post_id: row.try_get("post_id")?,
            user_id: row.try_get("user_id")?,
            username: row.try_get("username")?,
            profile_pic: row.try_get("profile_pic")?,
            image: row.try_get("image")?,
            description: row.try_get("description")?,
            cid: row.try_get("cid")?,
            category: row.try_get("category")?,
            likes: row.try_get("likes")?,
            liked: row.try_get("liked")?,
            upload_time: row.try_get("upload_time")?,
        })
    }
}

impl From<StoredPost> for PostView {
    fn from(row: StoredPost) -> Self {
        PostView {
            post_id: row.post_id,
            owner: PostOwner {
                user_id: row.user_id,
                username: row.username,
                profile_pic: row.profile_pic,
            },
            image: row.image,
            description: row.description,
            category: Category::new(row.cid, row.category),
            likes: row.likes,
            liked: row.liked,
            upload_time: row.upload_time,
        }
    }
}

/// A user row including the password hash.
#[derive(Debug)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

impl<'r> sqlx::FromRow<'r, PgRow> for StoredUser {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let code: i16 = row.try_get("role")?;
        let role = Role::try_from(code).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(StoredUser {
            user: User {
                user_id: row.try_get("user_id")?,
                username: row.try_get("username")?,
                email: row.try_get("email")?,
                profile_pic: row.try_get("profile_pic")?,
                role,
            },
            password_hash: row.try_get("password_hash")?,
        })
    }
}

impl From<StoredUser> for Credentials {
    fn from(row: StoredUser) -> Self {
        Credentials {
            user: row.user,
            password_hash: row.password_hash,
        }
    }
}
