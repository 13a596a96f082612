//! The step wizard
//!
//! [`WizardController`] is the state machine. [`WizardSession`] pairs it with
//! the four step forms so a front end only has to forward input.

pub mod controller;
pub mod navigation;
pub mod session;
pub mod step;

pub use controller::{
    Direction, StepPayload, StepView, SubmitOutcome, WizardController, WizardState,
};
pub use navigation::{nav_buttons, NavButtons};
pub use session::WizardSession;
pub use step::{Step, StepStatus};
