//! Accumulated and complete registrations

use serde::{Deserialize, Serialize};

use super::{AddressData, CompanyInfoData, PaymentData, SignUpData};

/// Step payloads collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRegistration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_up: Option<SignUpData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyInfoData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentData>,
}

impl PartialRegistration {
    /// Create an empty accumulation
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing has been submitted yet
    pub fn is_empty(&self) -> bool {
        self.sign_up.is_none()
            && self.company_info.is_none()
            && self.address.is_none()
            && self.payment.is_none()
    }

    /// Borrow the three payloads the review screen shows, if all are present
    pub fn review(&self) -> Option<ReviewSummary<'_>> {
        match (&self.sign_up, &self.company_info, &self.address) {
            (Some(sign_up), Some(company_info), Some(address)) => Some(ReviewSummary {
                sign_up,
                company_info,
                address,
            }),
            _ => None,
        }
    }

    /// Check if all four payloads are present
    pub fn is_complete(&self) -> bool {
        self.review().is_some() && self.payment.is_some()
    }

    /// Build the complete aggregate if every payload is present
    pub fn to_registration(&self) -> Option<Registration> {
        let review = self.review()?;
        let payment = self.payment.as_ref()?;
        Some(Registration {
            sign_up: review.sign_up.clone(),
            company_info: review.company_info.clone(),
            address: review.address.clone(),
            payment: payment.clone(),
        })
    }
}

/// The finished aggregate handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub sign_up: SignUpData,
    pub company_info: CompanyInfoData,
    pub address: AddressData,
    pub payment: PaymentData,
}

/// Read-only view of the prior steps, shown above the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSummary<'a> {
    pub sign_up: &'a SignUpData,
    pub company_info: &'a CompanyInfoData,
    pub address: &'a AddressData,
}

/// One titled block of the review summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl ReviewSummary<'_> {
    /// The summary as titled text blocks
    pub fn sections(&self) -> Vec<SummarySection> {
        vec![
            SummarySection {
                title: "Account Details",
                lines: vec![format!("Email: {}", self.sign_up.email)],
            },
            SummarySection {
                title: "Company Information",
                lines: vec![
                    format!("Company Name: {}", self.company_info.company_name),
                    format!("Company Type: {}", self.company_info.company_type),
                    format!("Industry: {}", self.company_info.industry),
                    format!("Employees: {}", self.company_info.employee_count),
                ],
            },
            SummarySection {
                title: "Address",
                lines: vec![
                    self.address.street.clone(),
                    self.address.locality_line(),
                    self.address.country_label(),
                ],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanyType, Industry};

    fn filled() -> PartialRegistration {
        PartialRegistration {
            sign_up: Some(SignUpData::new("a@b.com", "Secret123", "Secret123")),
            company_info: Some(CompanyInfoData {
                company_name: "Acme".into(),
                company_type: CompanyType::Llc,
                industry: Industry::Technology,
                employee_count: 12,
            }),
            address: Some(AddressData {
                street: "1 Main St".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                zip_code: "62701".into(),
                country: "US".into(),
            }),
            payment: None,
        }
    }

    #[test]
    fn test_review_requires_all_three() {
        let mut partial = filled();
        assert!(partial.review().is_some());

        partial.company_info = None;
        assert!(partial.review().is_none());
        assert!(PartialRegistration::new().review().is_none());
    }

    #[test]
    fn test_to_registration_needs_payment() {
        let mut partial = filled();
        assert!(!partial.is_complete());
        assert!(partial.to_registration().is_none());

        partial.payment = Some(PaymentData {
            card_number: "4242424242424242".into(),
            expiry_date: "12/29".into(),
            cvv: "123".into(),
            name_on_card: "Jane Doe".into(),
        });
        assert!(partial.is_complete());
        let registration = partial.to_registration().unwrap();
        assert_eq!(registration.company_info.company_name, "Acme");
    }

    #[test]
    fn test_summary_sections() {
        let partial = filled();
        let sections = partial.review().unwrap().sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].lines, vec!["Email: a@b.com"]);
        assert_eq!(sections[1].lines[1], "Company Type: LLC");
        assert_eq!(sections[2].lines[1], "Springfield, IL 62701");
        assert_eq!(sections[2].lines[2], "United States");
    }

    #[test]
    fn test_empty_partial_serializes_to_empty_object() {
        let json = serde_json::to_string(&PartialRegistration::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
