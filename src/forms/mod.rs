//! Step forms
//!
//! One form per wizard step. A form owns its fields and inline errors, and
//! turns its raw values into a typed [`StepPayload`] through the step's
//! schema. Forms never touch the wizard state; the session hands their
//! payloads to the controller.

pub mod address;
pub mod company;
pub mod field;
pub mod review_payment;
pub mod signup;
pub mod state;

pub use address::ChooseAddressForm;
pub use company::CompanyInformationForm;
pub use field::{FieldInput, FormField};
pub use review_payment::ReviewAndPaymentForm;
pub use signup::SignUpForm;
pub use state::{FormState, ShowWhen};

use crate::models::PartialRegistration;
use crate::schema::FieldErrors;
use crate::wizard::{Step, StepPayload};

/// Behaviour shared by the four step forms
pub trait StepForm {
    /// The step this form collects
    fn step(&self) -> Step;

    fn form(&self) -> &FormState;

    fn form_mut(&mut self) -> &mut FormState;

    /// Validate and build the payload
    ///
    /// On failure the errors stay on the form for inline display.
    fn submit(&mut self) -> Result<StepPayload, FieldErrors>;

    /// Seed the fields from a previously stored payload, if any
    fn load(&mut self, accumulated: &PartialRegistration);

    /// Clear values and errors
    fn reset(&mut self) {
        self.form_mut().reset();
    }

    /// Prepare the form for display: clear it, then re-seed from stored data
    fn mount(&mut self, accumulated: &PartialRegistration) {
        self.reset();
        self.load(accumulated);
    }
}
