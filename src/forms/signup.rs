//! Sign-up form

use crate::models::PartialRegistration;
use crate::schema::signup::{CONFIRM_PASSWORD, EMAIL, PASSWORD};
use crate::schema::{FieldErrors, SignUpSchema};
use crate::wizard::{Step, StepPayload};

use super::{FormField, FormState, StepForm};

/// Email and password with confirmation
#[derive(Debug, Clone)]
pub struct SignUpForm {
    form: FormState,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::text(EMAIL, "Email", "you@company.com"),
                FormField::secret(PASSWORD, "Password", "At least 8 characters"),
                FormField::secret(CONFIRM_PASSWORD, "Confirm Password", "Repeat your password"),
            ]),
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StepForm for SignUpForm {
    fn step(&self) -> Step {
        Step::SignUp
    }

    fn form(&self) -> &FormState {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    fn submit(&mut self) -> Result<StepPayload, FieldErrors> {
        self.form.validate(&SignUpSchema).map(StepPayload::SignUp)
    }

    fn load(&mut self, accumulated: &PartialRegistration) {
        if let Some(data) = &accumulated.sign_up {
            self.form.apply([
                (EMAIL, data.email.as_str()),
                (PASSWORD, data.password.as_str()),
                (CONFIRM_PASSWORD, data.confirm_password.as_str()),
            ]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SignUpData;

    #[test]
    fn test_submit_valid() {
        let mut form = SignUpForm::new();
        form.form_mut().set_value(EMAIL, "a@b.com");
        form.form_mut().set_value(PASSWORD, "Secret123");
        form.form_mut().set_value(CONFIRM_PASSWORD, "Secret123");

        let payload = form.submit().unwrap();
        assert_eq!(
            payload,
            StepPayload::SignUp(SignUpData::new("a@b.com", "Secret123", "Secret123"))
        );
        assert!(form.form().errors().is_empty());
    }

    #[test]
    fn test_submit_invalid_keeps_errors() {
        let mut form = SignUpForm::new();
        form.form_mut().set_value(EMAIL, "not-an-email");
        let errors = form.submit().unwrap_err();
        assert!(errors.has(EMAIL));
        assert!(errors.has(PASSWORD));
        assert_eq!(form.form().errors(), &errors);
    }

    #[test]
    fn test_password_fields_are_masked() {
        let form = SignUpForm::new();
        assert!(!form.form().field(EMAIL).unwrap().is_secret());
        assert!(form.form().field(PASSWORD).unwrap().is_secret());
        assert!(form.form().field(CONFIRM_PASSWORD).unwrap().is_secret());
    }

    #[test]
    fn test_mount_reseeds_from_stored_payload() {
        let mut form = SignUpForm::new();
        let accumulated = PartialRegistration {
            sign_up: Some(SignUpData::new("a@b.com", "Secret123", "Secret123")),
            ..PartialRegistration::new()
        };
        form.form_mut().set_value(EMAIL, "typed@over.it");
        form.mount(&accumulated);
        assert_eq!(form.form().value(EMAIL), "a@b.com");

        form.mount(&PartialRegistration::new());
        assert_eq!(form.form().value(EMAIL), "");
    }
}
