//! Company information

use serde::{Deserialize, Serialize};

use super::options::{CompanyType, Industry};

/// Company details collected by the second step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoData {
    pub company_name: String,
    pub company_type: CompanyType,
    pub industry: Industry,
    /// Always at least 1
    pub employee_count: u32,
}
