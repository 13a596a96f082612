//! Redacted registration records
//!
//! What leaves the wizard is never the raw aggregate. The password becomes an
//! Argon2id PHC string, the card keeps only its last four digits, and the CVV
//! is dropped.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{WizardError, WizardResult};
use crate::models::{AddressData, CompanyInfoData, Registration};

/// Card details safe to store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub last_four: String,
    pub expiry_date: String,
    pub name_on_card: String,
}

/// A completed registration with secrets removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub email: String,
    /// Argon2id PHC string
    pub password_hash: String,
    pub company_info: CompanyInfoData,
    pub address: AddressData,
    pub card: CardSummary,
}

impl SubmissionRecord {
    /// Redact a registration into a storable record
    pub fn from_registration(registration: &Registration) -> WizardResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            email: registration.sign_up.email.clone(),
            password_hash: hash_password(&registration.sign_up.password)?,
            company_info: registration.company_info.clone(),
            address: registration.address.clone(),
            card: CardSummary {
                last_four: registration.payment.last_four(),
                expiry_date: registration.payment.expiry_date.clone(),
                name_on_card: registration.payment.name_on_card.clone(),
            },
        })
    }

    /// Check a password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        use argon2::password_hash::{PasswordHash, PasswordVerifier};

        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

fn hash_password(password: &str) -> WizardResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| WizardError::Submission(format!("Password hashing failed: {}", e)))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{CompanyType, Industry, PaymentData, SignUpData};

    pub(crate) fn registration() -> Registration {
        Registration {
            sign_up: SignUpData::new("a@b.com", "Secret123", "Secret123"),
            company_info: CompanyInfoData {
                company_name: "Acme".into(),
                company_type: CompanyType::Partnership,
                industry: Industry::Retail,
                employee_count: 40,
            },
            address: AddressData {
                street: "1 Main St".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                zip_code: "62701".into(),
                country: "US".into(),
            },
            payment: PaymentData {
                card_number: "4000056655665556".into(),
                expiry_date: "08/28".into(),
                cvv: "987".into(),
                name_on_card: "Jane Doe".into(),
            },
        }
    }

    #[test]
    fn test_record_has_no_secrets() {
        let record = SubmissionRecord::from_registration(&registration()).unwrap();
        let json = serde_json::to_string(&record).unwrap();

        assert!(!json.contains("Secret123"));
        assert!(!json.contains("4000056655665556"));
        assert!(!json.contains("cvv"));
        assert!(json.contains("\"lastFour\":\"5556\""));
        assert!(record.password_hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_password_hash_verifies() {
        let record = SubmissionRecord::from_registration(&registration()).unwrap();
        assert!(record.verify_password("Secret123"));
        assert!(!record.verify_password("Secret124"));
    }

    #[test]
    fn test_each_record_gets_a_fresh_id() {
        let a = SubmissionRecord::from_registration(&registration()).unwrap();
        let b = SubmissionRecord::from_registration(&registration()).unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(a.password_hash, b.password_hash);
    }
}
