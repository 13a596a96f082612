//! Business address

use serde::{Deserialize, Serialize};

use super::options::{label_for, COUNTRIES, US};

/// Address collected by the third step
///
/// `state` is only meaningful for US addresses and is empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressData {
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl AddressData {
    /// Whether this is a US address
    pub fn is_us(&self) -> bool {
        self.country == US
    }

    /// "City, ST 12345", or "City 12345" when there is no state
    pub fn locality_line(&self) -> String {
        if self.state.is_empty() {
            format!("{} {}", self.city, self.zip_code)
        } else {
            format!("{}, {} {}", self.city, self.state, self.zip_code)
        }
    }

    /// Display name of the country
    pub fn country_label(&self) -> String {
        label_for(COUNTRIES, &self.country)
    }
}
