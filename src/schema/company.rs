//! Company information step schema

use super::{rules, FieldErrors, RawFields, Schema};
use crate::models::{CompanyInfoData, CompanyType, Industry};

pub const COMPANY_NAME: &str = "companyName";
pub const COMPANY_TYPE: &str = "companyType";
pub const INDUSTRY: &str = "industry";
pub const EMPLOYEE_COUNT: &str = "employeeCount";

const MAX_COMPANY_NAME: usize = 100;

/// Company name, legal form, industry, and head count
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyInfoSchema;

impl Schema for CompanyInfoSchema {
    type Output = CompanyInfoData;

    fn validate(&self, raw: &RawFields) -> Result<CompanyInfoData, FieldErrors> {
        let mut errors = FieldErrors::new();

        let company_name = errors.check(
            COMPANY_NAME,
            rules::required_max(
                raw.get(COMPANY_NAME),
                MAX_COMPANY_NAME,
                "Company name is required",
            ),
        );
        let company_type = errors
            .check(
                COMPANY_TYPE,
                rules::one_of(
                    raw.get(COMPANY_TYPE),
                    CompanyType::OPTIONS,
                    "Please select a company type",
                ),
            )
            .and_then(CompanyType::from_value);
        let industry = errors
            .check(
                INDUSTRY,
                rules::one_of(raw.get(INDUSTRY), Industry::OPTIONS, "Please select an industry"),
            )
            .and_then(Industry::from_value);
        let employee_count = errors.check(
            EMPLOYEE_COUNT,
            rules::positive_integer(
                raw.get(EMPLOYEE_COUNT),
                "Number of employees is required",
            ),
        );

        match (company_name, company_type, industry, employee_count) {
            (Some(company_name), Some(company_type), Some(industry), Some(employee_count))
                if errors.is_empty() =>
            {
                Ok(CompanyInfoData {
                    company_name,
                    company_type,
                    industry,
                    employee_count,
                })
            }
            _ => Err(errors),
        }
    }
}
