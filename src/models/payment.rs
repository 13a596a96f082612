//! Payment card details

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Card details collected by the final step
///
/// Wiped from memory on drop; `Debug` only shows the last four digits.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    /// Digits only, 16 long
    pub card_number: String,
    /// MM/YY
    pub expiry_date: String,
    pub cvv: String,
    pub name_on_card: String,
}

impl PaymentData {
    /// Last four digits of the card number
    pub fn last_four(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().collect();
        digits[digits.len().saturating_sub(4)..].iter().collect()
    }

    /// Card number with everything but the last four digits hidden
    pub fn masked_card_number(&self) -> String {
        format!("•••• •••• •••• {}", self.last_four())
    }
}

impl fmt::Debug for PaymentData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentData")
            .field("card_number", &self.masked_card_number())
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"[REDACTED]")
            .field("name_on_card", &self.name_on_card)
            .finish()
    }
}
