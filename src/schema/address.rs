//! Address step schema
//!
//! `state` is required only when `country` is "US". For any other country the
//! state value is ignored and the payload carries an empty string.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{rules, FieldErrors, RawFields, Schema};
use crate::models::{AddressData, COUNTRIES, US, US_STATES};

pub const STREET: &str = "street";
pub const CITY: &str = "city";
pub const COUNTRY: &str = "country";
pub const STATE: &str = "state";
pub const ZIP_CODE: &str = "zipCode";

static ZIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{2,9}$").expect("zip pattern is valid")
});

/// Street address with a country-dependent state field
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressSchema;

impl AddressSchema {
    /// Whether the state field applies to the given country value
    pub fn state_required(country: &str) -> bool {
        country.trim() == US
    }
}

impl Schema for AddressSchema {
    type Output = AddressData;

    fn validate(&self, raw: &RawFields) -> Result<AddressData, FieldErrors> {
        let mut errors = FieldErrors::new();

        let street = errors.check(
            STREET,
            rules::required(raw.get(STREET), "Street address is required"),
        );
        let city = errors.check(CITY, rules::required(raw.get(CITY), "City is required"));
        let country = errors.check(
            COUNTRY,
            rules::one_of(raw.get(COUNTRY), COUNTRIES, "Please select a country"),
        );

        let state = if country.map_or(false, Self::state_required) {
            errors.check(
                STATE,
                rules::one_of(raw.get(STATE), US_STATES, "Please select a state"),
            )
        } else {
            Some("")
        };

        let zip_code = errors.check(
            ZIP_CODE,
            rules::pattern(
                raw.get(ZIP_CODE),
                &ZIP_RE,
                "ZIP code is required",
                "Invalid ZIP code",
            ),
        );

        match (street, city, country, state, zip_code) {
            (Some(street), Some(city), Some(country), Some(state), Some(zip_code))
                if errors.is_empty() =>
            {
                Ok(AddressData {
                    street,
                    city,
                    state: state.to_string(),
                    zip_code,
                    country: country.to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(country: &str, state: &str) -> RawFields {
        RawFields::new()
            .with(STREET, "1 Main St")
            .with(CITY, "Springfield")
            .with(COUNTRY, country)
            .with(STATE, state)
            .with(ZIP_CODE, "62701")
    }

    #[test]
    fn test_us_requires_state() {
        let errors = AddressSchema.validate(&raw("US", "")).unwrap_err();
        assert_eq!(errors.get(STATE), Some("Please select a state"));

        let data = AddressSchema.validate(&raw("US", "IL")).unwrap();
        assert_eq!(data.state, "IL");
        assert!(data.is_us());
    }

    #[test]
    fn test_non_us_ignores_state() {
        let data = AddressSchema.validate(&raw("CA", "")).unwrap();
        assert_eq!(data.state, "");

        // A stale state value left over from a US selection is dropped
        let data = AddressSchema.validate(&raw("CA", "IL")).unwrap();
        assert_eq!(data.state, "");
    }

    #[test]
    fn test_unknown_state_rejected() {
        let errors = AddressSchema.validate(&raw("US", "ZZ")).unwrap_err();
        assert!(errors.has(STATE));
    }

    #[test]
    fn test_missing_country_does_not_require_state() {
        let errors = AddressSchema.validate(&raw("", "")).unwrap_err();
        assert_eq!(errors.get(COUNTRY), Some("Please select a country"));
        assert!(!errors.has(STATE));
    }

    #[test]
    fn test_zip_code_format() {
        let bad = raw("GB", "").with(ZIP_CODE, "!");
        let errors = AddressSchema.validate(&bad).unwrap_err();
        assert_eq!(errors.get(ZIP_CODE), Some("Invalid ZIP code"));

        let postcode = raw("GB", "").with(ZIP_CODE, "SW1A 1AA");
        assert!(AddressSchema.validate(&postcode).is_ok());
    }

    #[test]
    fn test_required_fields() {
        let errors = AddressSchema.validate(&RawFields::new()).unwrap_err();
        assert_eq!(errors.get(STREET), Some("Street address is required"));
        assert_eq!(errors.get(CITY), Some("City is required"));
        assert_eq!(errors.get(ZIP_CODE), Some("ZIP code is required"));
    }
}
