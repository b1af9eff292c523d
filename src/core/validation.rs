//! Form schemas for the sign-in and sign-up flows
//!
//! Each schema is a plain struct deriving [`Validate`]; field rules and the
//! messages shown under the inputs live on the attributes. [`validate_form`]
//! flattens validator's error tree into one message per field, which is what
//! the form components render.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sign-in form values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Sign-up form values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignUpInput {
    #[validate(length(min = 2, message = "Too short"))]
    pub name: String,
    #[validate(length(min = 2, message = "Too short"))]
    pub username: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters."))]
    pub password: String,
}

impl SignUpInput {
    /// Credentials used for the sign-in that follows account creation
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

/// First validation message per field, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for a field, if it failed validation
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Drop a field's message once the user edits it
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, list) in errors.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                out.insert(field.to_string(), message);
            }
        }
        out
    }
}

/// Validate a form, returning the per-field messages on failure
pub fn validate_form<T: Validate>(form: &T) -> Result<(), FieldErrors> {
    form.validate().map_err(FieldErrors::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_sign_up() -> SignUpInput {
        SignUpInput {
            name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "analytical".to_string(),
        }
    }

    #[test]
    fn test_valid_credentials_pass() {
        let creds = Credentials::new("user@example.com", "password123");
        assert!(validate_form(&creds).is_ok());
    }

    #[test]
    fn test_default_credentials_report_both_fields() {
        let errors = validate_form(&Credentials::default()).unwrap_err();

        let mut expected = FieldErrors::new();
        expected.insert("email", "Invalid email");
        expected.insert("password", "Password must be at least 8 characters.");
        assert_eq!(errors, expected);
    }

    #[rstest]
    #[case("")]
    #[case("plainaddress")]
    #[case("@example.com")]
    #[case("user@")]
    fn test_invalid_email_rejected(#[case] email: &str) {
        let creds = Credentials::new(email, "password123");
        let errors = validate_form(&creds).unwrap_err();

        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert!(errors.get("password").is_none());
    }

    #[rstest]
    #[case("", false)]
    #[case("1234567", false)]
    #[case("12345678", true)]
    #[case("a much longer passphrase", true)]
    fn test_password_length_boundary(#[case] password: &str, #[case] ok: bool) {
        let creds = Credentials::new("user@example.com", password);
        assert_eq!(validate_form(&creds).is_ok(), ok);
    }

    #[test]
    fn test_valid_sign_up_passes() {
        assert!(validate_form(&valid_sign_up()).is_ok());
    }

    #[rstest]
    #[case("name")]
    #[case("username")]
    fn test_short_names_rejected(#[case] field: &str) {
        let mut input = valid_sign_up();
        match field {
            "name" => input.name = "A".to_string(),
            _ => input.username = "a".to_string(),
        }

        let errors = validate_form(&input).unwrap_err();

        let mut expected = FieldErrors::new();
        expected.insert(field, "Too short");
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_empty_sign_up_reports_every_field() {
        let errors = validate_form(&SignUpInput::default()).unwrap_err();

        assert_eq!(errors.get("name"), Some("Too short"));
        assert_eq!(errors.get("username"), Some("Too short"));
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters.")
        );
    }

    #[test]
    fn test_sign_up_credentials_reuse_email_and_password() {
        let input = valid_sign_up();
        let creds = input.credentials();

        assert_eq!(creds.email, "ada@example.com");
        assert_eq!(creds.password, "analytical");
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut input = valid_sign_up();
        input.name = "Éa".to_string();
        assert!(validate_form(&input).is_ok());
    }

    #[test]
    fn test_clear_removes_only_that_field() {
        let mut errors = validate_form(&Credentials::default()).unwrap_err();
        errors.clear("email");

        assert_eq!(errors.get("email"), None);
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters.")
        );
    }
}
