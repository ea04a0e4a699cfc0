//! Error types for the ootd domain.

use thiserror::Error;

/// All possible errors from domain rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("unknown role code: {0}")]
    UnknownRole(i16),
}

impl Error {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Collapse a validator report into the first failing field.
    ///
    /// Fields are visited in name order so the reported field is stable.
    pub fn from_validation(errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|e| {
                    let reason = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (field.to_string(), reason)
                })
            })
            .collect();
        fields.sort();

        match fields.into_iter().next() {
            Some((field, reason)) => Error::InvalidField { field, reason },
            None => Error::invalid("input", "validation failed"),
        }
    }
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, Error>;
