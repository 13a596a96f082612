//! Wizard state machine
//!
//! The controller owns the current page, the direction of the last move, and
//! the payloads accumulated so far. It is the only thing that mutates that
//! state, through `next`, `back`, `jump_to`, and `submit_step`. Out-of-range
//! moves are silent no-ops. The controller does not validate payloads; step
//! forms do that before calling `submit_step`.

use crate::models::{
    AddressData, CompanyInfoData, PartialRegistration, PaymentData, Registration, ReviewSummary,
    SignUpData,
};

use super::step::Step;

/// Direction of the last page change
///
/// Only used to pick a transition hint in the front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    /// -1, 0, or +1
    pub fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::None => 0,
            Self::Forward => 1,
        }
    }

    fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Self::Backward,
            std::cmp::Ordering::Equal => Self::None,
            std::cmp::Ordering::Greater => Self::Forward,
        }
    }
}

/// A validated payload tagged with the step it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepPayload {
    SignUp(SignUpData),
    CompanyInfo(CompanyInfoData),
    Address(AddressData),
    Payment(PaymentData),
}

impl StepPayload {
    /// The step this payload is stored under
    pub fn step(&self) -> Step {
        match self {
            Self::SignUp(_) => Step::SignUp,
            Self::CompanyInfo(_) => Step::CompanyInfo,
            Self::Address(_) => Step::Address,
            Self::Payment(_) => Step::ReviewPayment,
        }
    }
}

/// What happened after a payload was stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved on to the given page
    Advanced(Step),
    /// Stored, but the page did not change
    Stayed,
    /// The payment was stored and every payload is present
    Completed(Registration),
}

/// What the current page should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepView<'a> {
    SignUp,
    CompanyInfo,
    Address,
    /// Summary of the prior steps above the payment form
    ReviewPayment(ReviewSummary<'a>),
    /// Review page reached before the prior steps were submitted
    Empty,
}

/// Snapshot of the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    page: Step,
    direction: Direction,
    accumulated: PartialRegistration,
}

impl WizardState {
    /// Current page
    pub fn page(&self) -> Step {
        self.page
    }

    /// Current page index, always within 0..=3
    pub fn page_index(&self) -> usize {
        self.page.index()
    }

    /// Direction of the last page change
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Payloads collected so far
    pub fn accumulated(&self) -> &PartialRegistration {
        &self.accumulated
    }
}

/// Owns and drives the wizard state
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    state: WizardState,
}

impl WizardController {
    /// Start at the sign-up page with nothing collected
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Current page
    pub fn page(&self) -> Step {
        self.state.page
    }

    /// Direction of the last page change
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Payloads collected so far
    pub fn accumulated(&self) -> &PartialRegistration {
        &self.state.accumulated
    }

    /// Advance one page; no-op on the last page
    pub fn next(&mut self) -> bool {
        self.move_to(self.state.page.index() + 1)
    }

    /// Go back one page; no-op on the first page
    pub fn back(&mut self) -> bool {
        match self.state.page.index().checked_sub(1) {
            Some(index) => self.move_to(index),
            None => {
                tracing::trace!("back ignored on first page");
                false
            }
        }
    }

    /// Jump straight to a page index; no-op when out of range
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.move_to(index)
    }

    /// Store a validated payload under its step, then advance
    pub fn submit_step(&mut self, payload: StepPayload) -> SubmitOutcome {
        let step = payload.step();
        let accumulated = &mut self.state.accumulated;
        match payload {
            StepPayload::SignUp(data) => accumulated.sign_up = Some(data),
            StepPayload::CompanyInfo(data) => accumulated.company_info = Some(data),
            StepPayload::Address(data) => accumulated.address = Some(data),
            StepPayload::Payment(data) => accumulated.payment = Some(data),
        }
        tracing::debug!(step = %step, "stored step payload");

        let moved = self.next();

        if step == Step::ReviewPayment {
            if let Some(registration) = self.state.accumulated.to_registration() {
                tracing::info!("registration complete");
                return SubmitOutcome::Completed(registration);
            }
        }

        if moved {
            SubmitOutcome::Advanced(self.state.page)
        } else {
            SubmitOutcome::Stayed
        }
    }

    /// What the current page should render
    pub fn body(&self) -> StepView<'_> {
        match self.state.page {
            Step::SignUp => StepView::SignUp,
            Step::CompanyInfo => StepView::CompanyInfo,
            Step::Address => StepView::Address,
            Step::ReviewPayment => match self.state.accumulated.review() {
                Some(summary) => StepView::ReviewPayment(summary),
                None => StepView::Empty,
            },
        }
    }

    /// Drop everything and return to the first page
    pub fn reset(&mut self) {
        self.state = WizardState::default();
    }

    fn move_to(&mut self, index: usize) -> bool {
        let Some(target) = Step::from_index(index) else {
            tracing::trace!(index, "move ignored, page out of range");
            return false;
        };
        let from = self.state.page;
        self.state.direction = Direction::between(from.index(), index);
        self.state.page = target;
        tracing::debug!(from = %from, to = %target, "changed page");
        true
    }
}
