//! Post categories.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{CategoryId, Error, Result};

/// A category posts are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A category name submitted for creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryDraft {
    #[validate(length(min = 1, max = 50, message = "must be 1 to 50 characters"))]
    pub name: String,
}

impl CategoryDraft {
    /// Trim and validate, yielding the name to store.
    pub fn into_name(self) -> Result<String> {
        let draft = CategoryDraft {
            name: self.name.trim().to_string(),
        };
        draft.validate().map_err(|e| Error::from_validation(&e))?;
        Ok(draft.name)
    }
}
