//! Application state for the TUI
//!
//! The App owns the wizard session and everything the screen needs besides
//! it: the open dialog, toasts, the slide marker after a page change, and
//! the areas the last frame drew, for mouse hit testing.

use ratatui::layout::Rect;

use crate::config::Settings;
use crate::submission::{self, SubmissionReceipt, SubmissionSink};
use crate::wizard::{Direction, Step, SubmitOutcome, WizardSession};

use super::widgets::{Notification, NotificationQueue};

/// Ticks the slide marker stays visible after a page change
pub const TRANSITION_TICKS: u8 = 3;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Registration submitted; shows the receipt
    Completed(SubmissionReceipt),
}

/// Slide hint shown after a page change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub direction: Direction,
    pub ticks_left: u8,
}

/// Areas drawn in the last frame that react to clicks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub steps: Vec<(Step, Rect)>,
    pub fields: Vec<(&'static str, Rect)>,
    pub back: Option<Rect>,
    pub next: Option<Rect>,
}

/// Main application state
pub struct App {
    /// The wizard being filled in
    pub session: WizardSession,

    /// Application settings
    pub settings: Settings,

    /// Where completed registrations go
    sinks: Vec<Box<dyn SubmissionSink>>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Toasts
    pub notifications: NotificationQueue,

    /// Slide marker state
    pub transition: Option<Transition>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Filled in while rendering
    pub hit_areas: HitAreas,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings, sinks: Vec<Box<dyn SubmissionSink>>) -> Self {
        Self {
            session: WizardSession::with_default_country(&settings.default_country),
            settings,
            sinks,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            notifications: NotificationQueue::new(),
            transition: None,
            status_message: None,
            hit_areas: HitAreas::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Press the next button: validate, store, and advance
    pub fn submit(&mut self) {
        match self.session.submit_current() {
            Ok(SubmitOutcome::Advanced(step)) => {
                self.clear_status();
                self.start_transition();
                tracing::debug!(step = %step, "advanced after submit");
            }
            Ok(SubmitOutcome::Stayed) => {
                if !self.session.can_submit() {
                    self.notifications.push(Notification::info(
                        "Complete the earlier steps first",
                    ));
                }
            }
            Ok(SubmitOutcome::Completed(registration)) => {
                match submission::submit(&registration, &self.sinks) {
                    Ok(receipt) => {
                        self.notifications
                            .push(Notification::success("Registration complete"));
                        self.open_dialog(ActiveDialog::Completed(receipt));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "submission failed");
                        self.notifications.push(Notification::error(e.to_string()));
                    }
                }
            }
            Err(errors) => {
                let count = errors.len();
                self.notifications.push(Notification::warning(format!(
                    "{} field{} need{} attention",
                    count,
                    if count == 1 { "" } else { "s" },
                    if count == 1 { "s" } else { "" },
                )));
            }
        }
    }

    /// Advance without submitting
    pub fn next_page(&mut self) {
        if self.session.next() {
            self.start_transition();
        }
    }

    /// Press the back button
    pub fn back(&mut self) {
        if self.session.back() {
            self.start_transition();
        }
    }

    /// Jump to a step from the step list
    pub fn jump_to(&mut self, step: Step) {
        if self.session.jump_to(step.index()) {
            self.start_transition();
        }
    }

    /// Clear everything and begin a new registration
    pub fn start_over(&mut self) {
        self.session.reset();
        self.transition = None;
        self.close_dialog();
        self.clear_status();
    }

    /// Advance timers by one tick
    pub fn tick(&mut self) {
        self.notifications.tick();
        if let Some(transition) = &mut self.transition {
            transition.ticks_left = transition.ticks_left.saturating_sub(1);
            if transition.ticks_left == 0 {
                self.transition = None;
            }
        }
    }

    fn start_transition(&mut self) {
        let direction = self.session.direction();
        self.transition = match direction {
            Direction::None => None,
            _ => Some(Transition {
                direction,
                ticks_left: TRANSITION_TICKS,
            }),
        };
    }
}
