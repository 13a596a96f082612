//! Payment step schema

use once_cell::sync::Lazy;
use regex::Regex;

use super::{rules, FieldErrors, RawFields, Schema};
use crate::models::PaymentData;

pub const CARD_NUMBER: &str = "cardNumber";
pub const EXPIRY_DATE: &str = "expiryDate";
pub const CVV: &str = "cvv";
pub const NAME_ON_CARD: &str = "nameOnCard";

static CARD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}([ -]?[0-9]{4}){3}$").expect("card pattern is valid"));
static EXPIRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").expect("expiry pattern is valid"));
static CVV_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,4}$").expect("cvv pattern is valid"));
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L} .'\-]+$").expect("name pattern is valid"));

/// Card number, expiry, CVV, and cardholder name
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentSchema;

impl Schema for PaymentSchema {
    type Output = PaymentData;

    fn validate(&self, raw: &RawFields) -> Result<PaymentData, FieldErrors> {
        let mut errors = FieldErrors::new();

        let card_number = errors
            .check(
                CARD_NUMBER,
                rules::pattern(
                    raw.get(CARD_NUMBER),
                    &CARD_RE,
                    "Card number is required",
                    "Card number must be 16 digits",
                ),
            )
            .map(|n| n.chars().filter(char::is_ascii_digit).collect::<String>());
        let expiry_date = errors.check(
            EXPIRY_DATE,
            rules::pattern(
                raw.get(EXPIRY_DATE),
                &EXPIRY_RE,
                "Expiry date is required",
                "Use MM/YY",
            ),
        );
        let cvv = errors.check(
            CVV,
            rules::pattern(raw.get(CVV), &CVV_RE, "CVV is required", "CVV must be 3 or 4 digits"),
        );
        let name_on_card = errors.check(
            NAME_ON_CARD,
            rules::pattern(
                raw.get(NAME_ON_CARD),
                &NAME_RE,
                "Name on card is required",
                "Name may only contain letters, spaces, apostrophes, periods and hyphens",
            ),
        );

        match (card_number, expiry_date, cvv, name_on_card) {
            (Some(card_number), Some(expiry_date), Some(cvv), Some(name_on_card))
                if errors.is_empty() =>
            {
                Ok(PaymentData {
                    card_number,
                    expiry_date,
                    cvv,
                    name_on_card,
                })
            }
            _ => Err(errors),
        }
    }
}
