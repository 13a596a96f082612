//! Review and payment form
//!
//! Only the payment fields are editable. The summary of the earlier steps is
//! read from the accumulated state when the page is drawn.

use crate::models::PartialRegistration;
use crate::schema::payment::{CARD_NUMBER, CVV, EXPIRY_DATE, NAME_ON_CARD};
use crate::schema::{FieldErrors, PaymentSchema};
use crate::wizard::{Step, StepPayload};

use super::{FormField, FormState, StepForm};

/// Card details for the final step
#[derive(Debug, Clone)]
pub struct ReviewAndPaymentForm {
    form: FormState,
}

impl ReviewAndPaymentForm {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::text(CARD_NUMBER, "Card Number", "1234 5678 9012 3456"),
                FormField::text(EXPIRY_DATE, "Expiry Date", "MM/YY"),
                FormField::secret(CVV, "CVV", "123"),
                FormField::text(NAME_ON_CARD, "Name on Card", "Jane Doe"),
            ]),
        }
    }
}

impl Default for ReviewAndPaymentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StepForm for ReviewAndPaymentForm {
    fn step(&self) -> Step {
        Step::ReviewPayment
    }

    fn form(&self) -> &FormState {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    fn submit(&mut self) -> Result<StepPayload, FieldErrors> {
        self.form.validate(&PaymentSchema).map(StepPayload::Payment)
    }

    fn load(&mut self, accumulated: &PartialRegistration) {
        if let Some(data) = &accumulated.payment {
            self.form.apply([
                (CARD_NUMBER, data.card_number.as_str()),
                (EXPIRY_DATE, data.expiry_date.as_str()),
                (CVV, data.cvv.as_str()),
                (NAME_ON_CARD, data.name_on_card.as_str()),
            ]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_strips_card_separators() {
        let mut form = ReviewAndPaymentForm::new();
        let state = form.form_mut();
        state.set_value(CARD_NUMBER, "4242 4242 4242 4242");
        state.set_value(EXPIRY_DATE, "12/29");
        state.set_value(CVV, "123");
        state.set_value(NAME_ON_CARD, "Jane O'Neil");

        let StepPayload::Payment(data) = form.submit().unwrap() else {
            panic!("wrong payload");
        };
        assert_eq!(data.card_number, "4242424242424242");
        assert_eq!(data.name_on_card, "Jane O'Neil");
    }

    #[test]
    fn test_bad_expiry_and_cvv() {
        let mut form = ReviewAndPaymentForm::new();
        let state = form.form_mut();
        state.set_value(CARD_NUMBER, "4242424242424242");
        state.set_value(EXPIRY_DATE, "13/29");
        state.set_value(CVV, "12");
        state.set_value(NAME_ON_CARD, "Jane Doe");

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get(EXPIRY_DATE), Some("Use MM/YY"));
        assert_eq!(errors.get(CVV), Some("CVV must be 3 or 4 digits"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_cvv_is_masked() {
        let form = ReviewAndPaymentForm::new();
        assert!(form.form().field(CVV).unwrap().is_secret());
        assert!(!form.form().field(CARD_NUMBER).unwrap().is_secret());
    }
}
