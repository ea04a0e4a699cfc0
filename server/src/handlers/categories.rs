//! Category listing and creation.

use ootd_domain::{Actor, Category, CategoryDraft};

use crate::db::Store;
use crate::error::{AppError, Result};

/// List every category.
pub async fn handle_list_categories(store: &dyn Store) -> Result<Vec<Category>> {
    Ok(store.list_categories().await?)
}

/// Create a category. Admins only.
pub async fn handle_create_category(
    store: &dyn Store,
    actor: Actor,
    draft: CategoryDraft,
) -> Result<Category> {
    if !actor.role.is_admin() {
        return Err(AppError::Forbidden);
    }

    let name = draft.into_name()?;
    let category = store.insert_category(&name).await?;
    tracing::info!("Created category {} ({})", category.name, category.id);
    Ok(category)
}
