//! Registration input and its validation rules.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{Error, Result};

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Sign-up payload as submitted by a client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[validate(length(min = 3, max = 50, message = "must be 3 to 50 characters"))]
    pub username: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[serde(alias = "passwd")]
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl Registration {
    /// Trim the username and email and lowercase the email, then check the
    /// result. Emails are unique regardless of case.
    pub fn normalized(mut self) -> Result<Self> {
        self.username = self.username.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.check()?;
        Ok(self)
    }

    /// Check every field, reporting the first violation.
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(|e| Error::from_validation(&e))
    }
}

/// Passwords need at least eight characters, one uppercase letter and one digit.
pub fn validate_password(password: &str) -> std::result::Result<(), ValidationError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_upper && has_digit {
        Ok(())
    } else {
        let mut err = ValidationError::new("weak_password");
        err.message =
            Some("must be at least 8 characters with an uppercase letter and a digit".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(username: &str, email: &str, password: &str) -> Registration {
        Registration {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_valid_registration() {
        let reg = registration("anna", "anna@example.com", "Secret123");
        assert!(reg.check().is_ok());
    }

    #[test]
    fn rejects_short_username() {
        let err = registration("an", "anna@example.com", "Secret123")
            .check()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "username"));
    }

    #[test]
    fn rejects_bad_email() {
        let err = registration("anna", "not-an-email", "Secret123")
            .check()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "email"));
    }

    #[test]
    fn blank_username_is_rejected_after_trimming() {
        let err = registration("   ", "anna@example.com", "Secret123")
            .normalized()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "username"));

        let err = registration("  an  ", "anna@example.com", "Secret123")
            .normalized()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "username"));
    }

    #[test]
    fn normalizes_username_and_email() {
        let reg = registration(" anna ", " Anna@Example.COM ", "Secret123")
            .normalized()
            .unwrap();
        assert_eq!(reg.username, "anna");
        assert_eq!(reg.email, "anna@example.com");
        assert_eq!(reg.password, "Secret123");
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("Secret123").is_ok());
        assert!(validate_password("Sh0rt").is_err());
        assert!(validate_password("alllowercase1").is_err());
        assert!(validate_password("NoDigitsHere").is_err());
    }

    #[test]
    fn first_violation_is_reported_in_field_order() {
        let err = registration("a", "nope", "weak").check().unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "email"));
    }

    #[test]
    fn accepts_legacy_passwd_key() {
        let reg: Registration = serde_json::from_str(
            r#"{"username":"anna","email":"anna@example.com","passwd":"Secret123"}"#,
        )
        .unwrap();
        assert_eq!(reg.password, "Secret123");
    }
}
