//! Wizard session
//!
//! Owns the controller and one form per step. Every page change remounts the
//! form of the new page, so it shows whatever was stored for that step.

use crate::forms::{
    ChooseAddressForm, CompanyInformationForm, ReviewAndPaymentForm, SignUpForm, StepForm,
};
use crate::models::PartialRegistration;
use crate::schema::FieldErrors;

use super::controller::{Direction, StepView, SubmitOutcome, WizardController};
use super::step::Step;

/// Controller plus step forms
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    controller: WizardController,
    sign_up: SignUpForm,
    company_info: CompanyInformationForm,
    address: ChooseAddressForm,
    review_payment: ReviewAndPaymentForm,
}

impl WizardSession {
    /// Fresh session on the sign-up page
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session whose address form starts on the given country
    pub fn with_default_country(country: &str) -> Self {
        Self {
            address: ChooseAddressForm::new().with_default_country(country),
            ..Self::default()
        }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    /// Current page
    pub fn page(&self) -> Step {
        self.controller.page()
    }

    /// Direction of the last page change
    pub fn direction(&self) -> Direction {
        self.controller.direction()
    }

    /// Payloads collected so far
    pub fn accumulated(&self) -> &PartialRegistration {
        self.controller.accumulated()
    }

    /// What the current page should render
    pub fn body(&self) -> StepView<'_> {
        self.controller.body()
    }

    /// Form for a step
    pub fn form(&self, step: Step) -> &dyn StepForm {
        match step {
            Step::SignUp => &self.sign_up,
            Step::CompanyInfo => &self.company_info,
            Step::Address => &self.address,
            Step::ReviewPayment => &self.review_payment,
        }
    }

    fn form_mut(&mut self, step: Step) -> &mut dyn StepForm {
        match step {
            Step::SignUp => &mut self.sign_up,
            Step::CompanyInfo => &mut self.company_info,
            Step::Address => &mut self.address,
            Step::ReviewPayment => &mut self.review_payment,
        }
    }

    /// Form of the current page
    pub fn current_form(&self) -> &dyn StepForm {
        self.form(self.page())
    }

    pub fn current_form_mut(&mut self) -> &mut dyn StepForm {
        self.form_mut(self.page())
    }

    /// Whether the current page has a form to submit
    ///
    /// The review page has nothing to submit until the earlier steps are in.
    pub fn can_submit(&self) -> bool {
        !matches!(self.body(), StepView::Empty)
    }

    /// Validate the current form and hand its payload to the controller
    ///
    /// Invalid input leaves the page and the accumulated state untouched.
    pub fn submit_current(&mut self) -> Result<SubmitOutcome, FieldErrors> {
        if !self.can_submit() {
            tracing::debug!("submit ignored, review page has nothing to show");
            return Ok(SubmitOutcome::Stayed);
        }

        let before = self.page();
        let payload = self.current_form_mut().submit()?;
        let outcome = self.controller.submit_step(payload);
        if self.page() != before {
            self.mount_current();
        }
        Ok(outcome)
    }

    /// Advance one page without submitting
    pub fn next(&mut self) -> bool {
        let moved = self.controller.next();
        if moved {
            self.mount_current();
        }
        moved
    }

    /// Go back one page
    pub fn back(&mut self) -> bool {
        let moved = self.controller.back();
        if moved {
            self.mount_current();
        }
        moved
    }

    /// Jump straight to a page index
    pub fn jump_to(&mut self, index: usize) -> bool {
        let before = self.page();
        let moved = self.controller.jump_to(index);
        if moved && self.page() != before {
            self.mount_current();
        }
        moved
    }

    /// First step with no stored payload
    pub fn first_incomplete_step(&self) -> Option<Step> {
        let accumulated = self.accumulated();
        if accumulated.sign_up.is_none() {
            Some(Step::SignUp)
        } else if accumulated.company_info.is_none() {
            Some(Step::CompanyInfo)
        } else if accumulated.address.is_none() {
            Some(Step::Address)
        } else if accumulated.payment.is_none() {
            Some(Step::ReviewPayment)
        } else {
            None
        }
    }

    /// Drop everything and start over
    pub fn reset(&mut self) {
        self.controller.reset();
        for step in Step::ALL {
            self.form_mut(step).reset();
        }
    }

    fn mount_current(&mut self) {
        let accumulated = self.controller.accumulated();
        match self.controller.page() {
            Step::SignUp => self.sign_up.mount(accumulated),
            Step::CompanyInfo => self.company_info.mount(accumulated),
            Step::Address => self.address.mount(accumulated),
            Step::ReviewPayment => self.review_payment.mount(accumulated),
        }
    }
}
