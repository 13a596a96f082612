use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use signup_wizard::config::paths::DATA_DIR_ENV;
use signup_wizard::config::{Settings, WizardPaths};
use signup_wizard::display::{format_config, format_submission};
use signup_wizard::logging::init_logging;
use signup_wizard::prompt::{PromptOutcome, PromptWizard};
use signup_wizard::submission::{self, load_record, sinks_from_settings};
use signup_wizard::wizard::WizardSession;

#[derive(Parser)]
#[command(
    name = "signup",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based multi-step registration wizard",
    long_about = "signup walks a new business through registration in four steps: \
                  account sign-up, company information, business address, and \
                  review & payment. Run it without a command for the full-screen \
                  interface, or use 'prompt' for a line-by-line session."
)]
struct Cli {
    /// Directory for settings, logs, and saved submissions
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Run the wizard one question at a time
    Prompt,

    /// Show a saved submission
    Show {
        /// Path to a .json or .yaml submission file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings, and logging
    let paths = match cli.data_dir {
        Some(dir) => WizardPaths::with_base_dir(dir),
        None => WizardPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&paths, &settings)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            signup_wizard::tui::run_tui(&paths, &settings)?;
        }
        Some(Commands::Prompt) => {
            run_prompt(&paths, &settings)?;
        }
        Some(Commands::Show { file }) => {
            let record = load_record(&file)
                .with_context(|| format!("Failed to load submission from {}", file.display()))?;
            println!("{}", format_submission(&record));
        }
        Some(Commands::Config) => {
            print!("{}", format_config(&paths, &settings));
        }
    }

    Ok(())
}

fn run_prompt(paths: &WizardPaths, settings: &Settings) -> Result<()> {
    let mut session = WizardSession::with_default_country(&settings.default_country);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    let outcome = PromptWizard::new(stdin.lock(), io::stdout())
        .hide_secrets(interactive)
        .run(&mut session)?;

    match outcome {
        PromptOutcome::Completed(registration) => {
            let sinks = sinks_from_settings(paths, settings);
            let receipt = submission::submit(&registration, &sinks)?;
            println!();
            println!("Registration complete!");
            println!("Reference: {}", receipt.id);
            for path in &receipt.saved_to {
                println!("Saved to:  {}", path.display());
            }
        }
        PromptOutcome::Cancelled => {
            tracing::info!("prompt registration cancelled");
        }
    }

    Ok(())
}
