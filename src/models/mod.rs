//! Core data models for the signup wizard
//!
//! One payload type per wizard step, the option lists behind the select
//! fields, and the partial/complete registration aggregates.

pub mod address;
pub mod company;
pub mod options;
pub mod payment;
pub mod registration;
pub mod signup;

pub use address::AddressData;
pub use company::CompanyInfoData;
pub use options::{CompanyType, Industry, COUNTRIES, US, US_STATES};
pub use payment::PaymentData;
pub use registration::{PartialRegistration, Registration, ReviewSummary, SummarySection};
pub use signup::SignUpData;
