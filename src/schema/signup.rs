//! Sign-up step schema

use super::{rules, FieldErrors, RawFields, Schema};
use crate::models::SignUpData;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

/// Email, password, and a matching confirmation
#[derive(Debug, Clone, Copy, Default)]
pub struct SignUpSchema;

impl Schema for SignUpSchema {
    type Output = SignUpData;

    fn validate(&self, raw: &RawFields) -> Result<SignUpData, FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = errors.check(EMAIL, rules::email(raw.get(EMAIL)));
        let password = errors.check(PASSWORD, rules::password(raw.get(PASSWORD)));

        let confirm = raw.get(CONFIRM_PASSWORD);
        if confirm.is_empty() {
            errors.insert(CONFIRM_PASSWORD, "Please confirm your password");
        } else if confirm != raw.get(PASSWORD) {
            errors.insert(CONFIRM_PASSWORD, "Passwords don't match");
        }

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => Ok(SignUpData {
                email,
                confirm_password: password.clone(),
                password,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(email: &str, password: &str, confirm: &str) -> RawFields {
        RawFields::new()
            .with(EMAIL, email)
            .with(PASSWORD, password)
            .with(CONFIRM_PASSWORD, confirm)
    }

    #[test]
    fn test_valid_sign_up() {
        let data = SignUpSchema
            .validate(&raw("a@b.com", "Secret123", "Secret123"))
            .unwrap();
        assert_eq!(data, SignUpData::new("a@b.com", "Secret123", "Secret123"));
    }

    #[test]
    fn test_email_is_trimmed() {
        let data = SignUpSchema
            .validate(&raw("  a@b.com ", "Secret123", "Secret123"))
            .unwrap();
        assert_eq!(data.email, "a@b.com");
    }

    #[test]
    fn test_mismatched_confirmation() {
        let errors = SignUpSchema
            .validate(&raw("a@b.com", "Secret123", "Secret124"))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(CONFIRM_PASSWORD), Some("Passwords don't match"));
    }

    #[test]
    fn test_all_fields_reported() {
        let errors = SignUpSchema.validate(&RawFields::new()).unwrap_err();
        assert_eq!(errors.get(EMAIL), Some("Email is required"));
        assert_eq!(errors.get(PASSWORD), Some("Password is required"));
        assert_eq!(
            errors.get(CONFIRM_PASSWORD),
            Some("Please confirm your password")
        );
    }
}
