//! Database operations for the users table.

use ootd_domain::{Credentials, NewUser, User};
use sqlx::PgPool;

use super::rows::StoredUser;
use super::{StoreError, StoreResult};

/// Insert a user. Taken usernames or emails yield [`StoreError::Duplicate`].
pub async fn insert_user(pool: &PgPool, user: &NewUser) -> StoreResult<User> {
    let row = sqlx::query_as::<_, StoredUser>(
        r#"
        INSERT INTO users (username, email, password_hash, profile_pic, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING user_id, username, email, password_hash, profile_pic, role
        "#,
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.profile_pic)
    .bind(user.role.code())
    .fetch_one(pool)
    .await
    .map_err(StoreError::from_sqlx)?;

    Ok(row.user)
}

/// Look up a user and password hash by username.
pub async fn find_credentials(pool: &PgPool, username: &str) -> StoreResult<Option<Credentials>> {
    let row = sqlx::query_as::<_, StoredUser>(
        r#"
        SELECT user_id, username, email, password_hash, profile_pic, role
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Credentials::from))
}
