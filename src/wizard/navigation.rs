//! Back/next button state

use super::step::Step;

/// How the back/next pair should look on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub back_enabled: bool,
    pub next_label: &'static str,
}

/// Button state for a page
pub fn nav_buttons(page: Step) -> NavButtons {
    let next_label = match page {
        Step::SignUp => "Sign Up for Free",
        Step::ReviewPayment => "Complete Payment",
        Step::CompanyInfo | Step::Address => "Continue",
    };

    NavButtons {
        back_enabled: page != Step::SignUp,
        next_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_disabled_on_first_page() {
        assert!(!nav_buttons(Step::SignUp).back_enabled);
        assert!(nav_buttons(Step::CompanyInfo).back_enabled);
        assert!(nav_buttons(Step::ReviewPayment).back_enabled);
    }

    #[test]
    fn test_next_labels() {
        assert_eq!(nav_buttons(Step::SignUp).next_label, "Sign Up for Free");
        assert_eq!(nav_buttons(Step::CompanyInfo).next_label, "Continue");
        assert_eq!(nav_buttons(Step::Address).next_label, "Continue");
        assert_eq!(nav_buttons(Step::ReviewPayment).next_label, "Complete Payment");
    }
}
