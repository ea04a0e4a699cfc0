//! Database operations for the categories table.

use ootd_domain::Category;
use sqlx::PgPool;

use super::rows::StoredCategory;
use super::{StoreError, StoreResult};

/// Get every category.
pub async fn list_categories(pool: &PgPool) -> StoreResult<Vec<Category>> {
    let rows = sqlx::query_as::<_, StoredCategory>(
        r#"
        SELECT cid, category
        FROM categories
        ORDER BY cid
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Category::from).collect())
}

/// Insert a category and return it with its generated id.
pub async fn insert_category(pool: &PgPool, name: &str) -> StoreResult<Category> {
    let row = sqlx::query_as::<_, StoredCategory>(
        r#"
        INSERT INTO categories (category)
        VALUES ($1)
        RETURNING cid, category
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(StoreError::from_sqlx)?;

    Ok(row.into())
}
