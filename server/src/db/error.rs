//! Classified datastore failures.

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Failure of a data-access operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A unique constraint rejected the write.
    #[error("{0} already exists")]
    Duplicate(&'static str),

    /// A referenced row does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl StoreError {
    /// Classify constraint violations; everything else stays a database error.
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            let entity = entity_of(db_err.constraint().unwrap_or_default());
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return StoreError::Duplicate(entity),
                Some(FOREIGN_KEY_VIOLATION) => return StoreError::NotFound(entity),
                _ => {}
            }
        }
        StoreError::Database(e)
    }
}

/// Map a default PostgreSQL constraint name (`<table>_<column>_key` or
/// `<table>_<column>_fkey`) to the entity it guards.
fn entity_of(constraint: &str) -> &'static str {
    if constraint.contains("username") {
        "username"
    } else if constraint.contains("email") {
        "email"
    } else if constraint.contains("category") {
        "category"
    } else if constraint.contains("post_id") {
        "post"
    } else if constraint.contains("user_id") {
        "user"
    } else {
        "record"
    }
}

/// Result type for data-access operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
