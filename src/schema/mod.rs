//! Field schemas for each wizard step
//!
//! A schema takes the raw string values typed into a form and either produces
//! the typed payload for that step or a [`FieldErrors`] map with one message
//! per invalid field. Validation never panics and never stops at the first
//! failure; every field is checked so the form can show all messages inline.

pub mod address;
pub mod company;
pub mod payment;
pub mod rules;
pub mod signup;

use std::collections::BTreeMap;
use std::fmt;

pub use address::AddressSchema;
pub use company::CompanyInfoSchema;
pub use payment::PaymentSchema;
pub use signup::SignUpSchema;

/// A validation rule set bound to one step's payload type
pub trait Schema {
    /// The typed payload produced on success
    type Output;

    /// Validate raw field values
    fn validate(&self, raw: &RawFields) -> Result<Self::Output, FieldErrors>;
}

/// Raw, unvalidated field values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    values: BTreeMap<&'static str, String>,
}

impl RawFields {
    /// Create an empty set of values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field value
    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Get a field value; missing fields read as empty
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Whether a field was supplied at all
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field
    ///
    /// Only the first error per field is kept.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Record the error of a rule result and pass its value through
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }

    /// Get the message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Check whether a field has an error
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Check if there are no errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of invalid fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over (field, message) pairs in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Drop the error for one field
    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Remove all errors
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_fields_missing_reads_empty() {
        let raw = RawFields::new().with("email", "a@b.com");
        assert_eq!(raw.get("email"), "a@b.com");
        assert_eq!(raw.get("password"), "");
        assert!(!raw.contains("password"));
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Email is required");
        errors.insert("email", "Invalid email address");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_check_passes_value_through() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.check("a", Ok::<_, String>(3)), Some(3));
        assert_eq!(errors.check::<u32>("b", Err("bad".into())), None);
        assert!(errors.has("b"));
        assert!(!errors.has("a"));
    }

    #[test]
    fn test_display_joins_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("zipCode", "ZIP code is required");
        errors.insert("city", "City is required");
        assert_eq!(
            errors.to_string(),
            "city: City is required; zipCode: ZIP code is required"
        );
    }
}
