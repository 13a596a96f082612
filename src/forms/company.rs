//! Company information form

use crate::models::{CompanyType, Industry, PartialRegistration};
use crate::schema::company::{COMPANY_NAME, COMPANY_TYPE, EMPLOYEE_COUNT, INDUSTRY};
use crate::schema::{CompanyInfoSchema, FieldErrors};
use crate::wizard::{Step, StepPayload};

use super::{FormField, FormState, StepForm};

/// Company name, type, industry, and head count
#[derive(Debug, Clone)]
pub struct CompanyInformationForm {
    form: FormState,
}

impl CompanyInformationForm {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::text(COMPANY_NAME, "Company Name", "Acme Inc."),
                FormField::select(
                    COMPANY_TYPE,
                    "Company Type",
                    "Select company type",
                    CompanyType::OPTIONS,
                ),
                FormField::select(INDUSTRY, "Industry", "Select industry", Industry::OPTIONS),
                FormField::text(EMPLOYEE_COUNT, "Number of Employees", "1"),
            ]),
        }
    }
}

impl Default for CompanyInformationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StepForm for CompanyInformationForm {
    fn step(&self) -> Step {
        Step::CompanyInfo
    }

    fn form(&self) -> &FormState {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    fn submit(&mut self) -> Result<StepPayload, FieldErrors> {
        self.form
            .validate(&CompanyInfoSchema)
            .map(StepPayload::CompanyInfo)
    }

    fn load(&mut self, accumulated: &PartialRegistration) {
        if let Some(data) = &accumulated.company_info {
            let employees = data.employee_count.to_string();
            self.form.apply([
                (COMPANY_NAME, data.company_name.as_str()),
                (COMPANY_TYPE, data.company_type.value()),
                (INDUSTRY, data.industry.value()),
                (EMPLOYEE_COUNT, employees.as_str()),
            ]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanyInfoData;

    fn filled() -> CompanyInformationForm {
        let mut form = CompanyInformationForm::new();
        let state = form.form_mut();
        state.set_value(COMPANY_NAME, "Acme");
        state.set_value(COMPANY_TYPE, "llc");
        state.set_value(INDUSTRY, "technology");
        state.set_value(EMPLOYEE_COUNT, "12");
        form
    }

    #[test]
    fn test_submit_valid() {
        let mut form = filled();
        assert_eq!(
            form.submit().unwrap(),
            StepPayload::CompanyInfo(CompanyInfoData {
                company_name: "Acme".into(),
                company_type: CompanyType::Llc,
                industry: Industry::Technology,
                employee_count: 12,
            })
        );
    }

    #[test]
    fn test_zero_employees_rejected() {
        let mut form = filled();
        form.form_mut().set_value(EMPLOYEE_COUNT, "0");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has(EMPLOYEE_COUNT));
    }

    #[test]
    fn test_selects_cycle_through_options() {
        let mut form = CompanyInformationForm::new();
        form.form_mut().set_focus(INDUSTRY);
        let select = form
            .form_mut()
            .focused_field_mut()
            .and_then(|f| f.select_mut())
            .unwrap();
        select.next();
        select.next();
        assert_eq!(form.form().value(INDUSTRY), "finance");
    }

    #[test]
    fn test_load_round_trips_stored_payload() {
        let mut form = filled();
        let StepPayload::CompanyInfo(data) = form.submit().unwrap() else {
            panic!("wrong payload");
        };
        let accumulated = PartialRegistration {
            company_info: Some(data),
            ..PartialRegistration::new()
        };

        let mut fresh = CompanyInformationForm::new();
        fresh.mount(&accumulated);
        assert_eq!(fresh.form().value(COMPANY_TYPE), "llc");
        assert_eq!(fresh.form().value(EMPLOYEE_COUNT), "12");
    }
}
