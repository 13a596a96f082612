//! Wizard pages

use std::fmt;

/// One page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    SignUp,
    CompanyInfo,
    Address,
    ReviewPayment,
}

/// How a step relates to the current page in the step list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl Step {
    /// All steps in page order
    pub const ALL: [Step; 4] = [
        Step::SignUp,
        Step::CompanyInfo,
        Step::Address,
        Step::ReviewPayment,
    ];

    /// Highest valid page index
    pub const LAST_INDEX: usize = 3;

    /// Zero-based page index
    pub fn index(self) -> usize {
        match self {
            Self::SignUp => 0,
            Self::CompanyInfo => 1,
            Self::Address => 2,
            Self::ReviewPayment => 3,
        }
    }

    /// Step for a page index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-based number shown in the step list
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Short title
    pub fn title(self) -> &'static str {
        match self {
            Self::SignUp => "Sign Up",
            Self::CompanyInfo => "Company Information",
            Self::Address => "Business Address",
            Self::ReviewPayment => "Review & Payment",
        }
    }

    /// One-line description under the title
    pub fn description(self) -> &'static str {
        match self {
            Self::SignUp => "Create your account",
            Self::CompanyInfo => "Tell us about your business",
            Self::Address => "Where are you located?",
            Self::ReviewPayment => "Complete your registration",
        }
    }

    /// Status of this step relative to the current page
    pub fn status(self, current: Step) -> StepStatus {
        match self.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
