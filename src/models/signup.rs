//! Sign-up credentials

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Account credentials collected by the first step
///
/// Password fields are wiped from memory on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct SignUpData {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpData {
    /// Create sign-up data
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

impl fmt::Debug for SignUpData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpData")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let data = SignUpData::new("a@b.com", "Secret123", "Secret123");
        let debug = format!("{:?}", data);
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("Secret123"));
    }

    #[test]
    fn test_camel_case_fields() {
        let data = SignUpData::new("a@b.com", "Secret123", "Secret123");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["confirmPassword"], "Secret123");
    }
}
