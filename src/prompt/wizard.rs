//! Prompt wizard

use std::io::{BufRead, Write};

use crate::error::{WizardError, WizardResult};
use crate::forms::FormField;
use crate::models::Registration;
use crate::schema::FieldErrors;
use crate::wizard::{nav_buttons, Step, StepView, SubmitOutcome, WizardSession};

const BACK: &str = ":back";
const QUIT: &str = ":quit";

/// Option lists longer than this are not printed in full
const MAX_LISTED_OPTIONS: usize = 10;

/// How a prompt run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Completed(Registration),
    Cancelled,
}

enum Answer {
    Value(String),
    Back,
    Quit,
}

/// Drives a [`WizardSession`] over a reader and a writer
pub struct PromptWizard<R, W> {
    input: R,
    output: W,
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> PromptWizard<R, W> {
    /// Secrets are read from the same reader as everything else
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Read passwords and CVV from the terminal without echo
    pub fn hide_secrets(mut self, hide: bool) -> Self {
        self.hide_secrets = hide;
        self
    }

    /// Run until the registration completes, the user quits, or input ends
    pub fn run(&mut self, session: &mut WizardSession) -> WizardResult<PromptOutcome> {
        self.line("")?;
        self.line("===========================================")?;
        self.line("  Business Registration")?;
        self.line("===========================================")?;
        self.line(&format!(
            "Type '{}' to go to the previous step or '{}' to stop.",
            BACK, QUIT
        ))?;

        'steps: loop {
            if !session.can_submit() {
                if let Some(step) = session.first_incomplete_step() {
                    self.line(&format!("Please complete '{}' first.", step.title()))?;
                    session.jump_to(step.index());
                }
            }

            let page = session.page();
            self.header(page)?;
            if let StepView::ReviewPayment(summary) = session.body() {
                for section in summary.sections() {
                    self.line(&format!("  {}", section.title))?;
                    for line in &section.lines {
                        self.line(&format!("    {}", line))?;
                    }
                }
                self.line("")?;
            }

            let mut position = 0;
            loop {
                let visible = session.current_form().form().visible_indices();
                let Some(&index) = visible.get(position) else {
                    break;
                };

                let field = session.current_form().form().fields()[index].clone();
                match self.ask(&field)? {
                    Answer::Quit => {
                        self.line("Registration cancelled.")?;
                        return Ok(PromptOutcome::Cancelled);
                    }
                    Answer::Back => {
                        if session.back() {
                            continue 'steps;
                        }
                        self.line("  Already on the first step.")?;
                    }
                    Answer::Value(value) if value.is_empty() => position += 1,
                    Answer::Value(value) => {
                        if session.current_form_mut().form_mut().set_value(field.key, &value) {
                            position += 1;
                        } else {
                            self.line("  Choose one of the listed options.")?;
                        }
                    }
                }
            }

            match session.submit_current() {
                Ok(SubmitOutcome::Completed(registration)) => {
                    self.line("Registration complete.")?;
                    return Ok(PromptOutcome::Completed(registration));
                }
                Ok(_) => {}
                Err(errors) => self.print_errors(session, &errors)?,
            }
        }
    }

    fn header(&mut self, page: Step) -> WizardResult<()> {
        self.line("")?;
        self.line(&format!(
            "Step {} of {}: {} ({})",
            page.number(),
            Step::ALL.len(),
            page.title(),
            page.description()
        ))?;
        self.line("-------------------------------------------")
    }

    fn ask(&mut self, field: &FormField) -> WizardResult<Answer> {
        if let Some(options) = field.options() {
            if options.len() <= MAX_LISTED_OPTIONS {
                for (i, (_, label)) in options.iter().enumerate() {
                    self.line(&format!("    {}) {}", i + 1, label))?;
                }
            }
        }

        let current = field.value();
        let prompt = if current.is_empty() {
            format!("{}: ", field.label)
        } else if field.is_secret() {
            format!("{} [keep]: ", field.label)
        } else {
            format!("{} [{}]: ", field.label, current)
        };

        let raw = if field.is_secret() && self.hide_secrets {
            Some(
                rpassword::prompt_password(&prompt)
                    .map_err(|e| WizardError::Io(format!("Failed to read input: {}", e)))?,
            )
        } else {
            self.read_line(&prompt)?
        };

        let Some(line) = raw else {
            return Ok(Answer::Quit);
        };
        let trimmed = line.trim();
        Ok(if trimmed == BACK {
            Answer::Back
        } else if trimmed == QUIT {
            Answer::Quit
        } else if field.is_secret() {
            // Whitespace is part of a secret
            Answer::Value(line)
        } else {
            Answer::Value(trimmed.to_string())
        })
    }

    fn print_errors(&mut self, session: &WizardSession, errors: &FieldErrors) -> WizardResult<()> {
        self.line("")?;
        self.line("Please fix the following:")?;
        let form = session.current_form().form();
        for (key, message) in errors.iter() {
            let label = form.field(key).map(|f| f.label).unwrap_or(key);
            self.line(&format!("  ✗ {}: {}", label, message))?;
        }
        let next_label = nav_buttons(session.page()).next_label;
        self.line(&format!("Try again, then '{}'.", next_label))
    }

    fn read_line(&mut self, prompt: &str) -> WizardResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn line(&mut self, text: &str) -> WizardResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FULL_RUN: &str = "\
a@b.com
Secret123
Secret123
Acme
corporation
2
3
1 Main St
Toronto
CA
M5V 2T6
4242 4242 4242 4242
12/29
123
Jane Doe
";

    fn run(input: &str) -> (PromptOutcome, String) {
        let mut session = WizardSession::new();
        let mut output = Vec::new();
        let outcome = PromptWizard::new(Cursor::new(input.to_string()), &mut output)
            .run(&mut session)
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_run_completes() {
        let (outcome, output) = run(FULL_RUN);
        match outcome {
            PromptOutcome::Completed(registration) => {
                assert_eq!(registration.company_info.company_name, "Acme");
                assert_eq!(registration.company_info.industry.value(), "finance");
                assert_eq!(registration.address.state, "");
                assert_eq!(registration.payment.card_number, "4242424242424242");
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(output.contains("Step 4 of 4: Review & Payment"));
        assert!(output.contains("Account Details"));
        assert!(output.contains("Toronto M5V 2T6"));
    }

    #[test]
    fn test_errors_repeat_the_step() {
        let input = "bad\nshort\nshort\na@b.com\nSecret123\nSecret123\n:quit\n";
        let (outcome, output) = run(input);
        assert_eq!(outcome, PromptOutcome::Cancelled);
        assert!(output.contains("✗ Email: Invalid email address"));
        assert!(output.contains("Step 2 of 4: Company Information"));
    }

    #[test]
    fn test_back_returns_with_values_kept() {
        let input = "a@b.com\nSecret123\nSecret123\n:back\n\n\n\n:quit\n";
        let (outcome, output) = run(input);
        assert_eq!(outcome, PromptOutcome::Cancelled);
        assert!(output.contains("Email [a@b.com]: "));
        assert!(output.contains("Password [keep]: "));
    }

    #[test]
    fn test_us_address_asks_for_state() {
        let mut session = WizardSession::new();
        let input = format!(
            "{}\n",
            [
                "a@b.com", "Secret123", "Secret123", "Acme", "llc", "technology", "5",
                "1 Main St", "Springfield", "US", "IL", "62701", ":quit",
            ]
            .join("\n")
        );
        let mut output = Vec::new();
        let outcome = PromptWizard::new(Cursor::new(input), &mut output)
            .run(&mut session)
            .unwrap();

        assert_eq!(outcome, PromptOutcome::Cancelled);
        assert_eq!(
            session.accumulated().address.as_ref().map(|a| a.state.as_str()),
            Some("IL")
        );
    }

    #[test]
    fn test_unknown_option_is_asked_again() {
        let input = "a@b.com\nSecret123\nSecret123\nAcme\nspaceship\n:quit\n";
        let (_, output) = run(input);
        assert!(output.contains("Choose one of the listed options."));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (outcome, _) = run("a@b.com\n");
        assert_eq!(outcome, PromptOutcome::Cancelled);
    }
}
