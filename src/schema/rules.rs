//! Reusable field rules
//!
//! Each rule takes the raw value and returns the cleaned value or the message
//! to show next to the field.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Trim the value and require it to be non-empty
pub fn required(value: &str, message: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(message.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Required value no longer than `max` characters
pub fn required_max(value: &str, max: usize, message: &str) -> Result<String, String> {
    let value = required(value, message)?;
    if value.chars().count() > max {
        return Err(format!("Must be at most {} characters", max));
    }
    Ok(value)
}

/// Required value that must match a pattern
pub fn pattern(
    value: &str,
    re: &Regex,
    required_message: &str,
    invalid_message: &str,
) -> Result<String, String> {
    let value = required(value, required_message)?;
    if re.is_match(&value) {
        Ok(value)
    } else {
        Err(invalid_message.to_string())
    }
}

/// Email address
pub fn email(value: &str) -> Result<String, String> {
    pattern(value, &EMAIL_RE, "Email is required", "Invalid email address")
}

/// Account password: at least 8 characters with a letter and a digit
///
/// Not trimmed; whitespace is part of the secret.
pub fn password(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("Password is required".to_string());
    }
    if value.chars().count() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if !value.chars().any(|c| c.is_alphabetic()) || !value.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a letter and a number".to_string());
    }
    Ok(value.to_string())
}

/// Whole number greater than zero
pub fn positive_integer(value: &str, message: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(message.to_string());
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Err("Must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err("Enter a whole number".to_string()),
    }
}

/// Value that must be one of the option values
pub fn one_of(
    value: &str,
    options: &[(&'static str, &'static str)],
    message: &str,
) -> Result<&'static str, String> {
    let trimmed = value.trim();
    options
        .iter()
        .find(|(v, _)| *v == trimmed)
        .map(|(v, _)| *v)
        .ok_or_else(|| message.to_string())
}
