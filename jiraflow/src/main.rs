mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use jiraflow_core::{
    config::{self, Config},
    error::FlowError,
    git::{CliGitProvider, GitError, GitProvider},
    jira::{CliTicketLookup, TicketLookup},
    state::{AppState, Outcome},
};
use jiraflow_tui::{Theme, WizardExit};
use std::{path::PathBuf, process::ExitCode, sync::Arc};

#[derive(Parser)]
#[command(
    version,
    about = "Create consistently named git branches from Jira tickets",
    long_about = "Create consistently named git branches from Jira tickets.\n\n\
                  Run without flags for the interactive wizard. Passing --type, --base or \
                  --ticket creates the branch directly."
)]
struct Cli {
    /// Override path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Branch type, e.g. feature or hotfix
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    branch_type: Option<String>,

    /// Base branch (default: the current branch)
    #[arg(short, long)]
    base: Option<String>,

    /// Jira ticket id, e.g. PROJ-123
    #[arg(long)]
    ticket: Option<String>,

    /// Ticket title; fetched with the jira CLI when omitted
    #[arg(long)]
    title: Option<String>,

    /// Print the branch that would be created and exit
    #[arg(long)]
    dry_run: bool,

    /// Log level for the log file
    #[arg(long, value_name = "LEVEL", default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: log::LevelFilter,
}

impl Cli {
    fn is_non_interactive(&self) -> bool {
        self.branch_type.is_some() || self.base.is_some() || self.ticket.is_some()
    }

    /// Flags that only mean something without the wizard
    fn ignored_in_wizard(&self) -> Vec<&'static str> {
        let mut notes = Vec::new();
        if self.dry_run {
            notes.push("Dry-run mode is not applicable in interactive mode");
        }
        if self.title.is_some() {
            notes.push("--title is only used together with --ticket; enter the title in the wizard");
        }
        notes
    }

    fn create_args(&self) -> cli::CreateArgs {
        cli::CreateArgs {
            branch_type: self.branch_type.clone(),
            base: self.base.clone(),
            ticket: self.ticket.clone(),
            title: self.title.clone(),
            dry_run: self.dry_run,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup_logging(cli.log_level) {
        eprintln!("Warning: failed to initialise logging: {e:#}");
    }

    let non_interactive = cli.is_non_interactive();
    let config = match config::load_config(cli.config.as_deref()) {
        Ok((config, warnings)) => {
            for warning in &warnings {
                log::warn!("config: {warning}");
                if non_interactive {
                    eprintln!("Warning: {warning}");
                }
            }
            config
        }
        Err(error) => return report(&FlowError::from(error)),
    };

    let git: Arc<dyn GitProvider> = Arc::new(CliGitProvider::default());
    let lookup: Arc<dyn TicketLookup> = Arc::new(CliTicketLookup::default());

    if non_interactive {
        return match cli::cmd_create(&config, git.as_ref(), lookup.as_ref(), &cli.create_args()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => report(&error),
        };
    }

    for note in cli.ignored_in_wizard() {
        log::info!("{note}");
        eprintln!("Note: {note}");
    }

    match run_tui(&config, &git, &lookup) {
        Ok(code) => code,
        Err(error) => match error.downcast_ref::<FlowError>() {
            Some(flow_error) => report(flow_error),
            None => {
                log::error!("{error:#}");
                eprintln!("Error: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn report(error: &FlowError) -> ExitCode {
    if matches!(error, FlowError::Cancelled) {
        log::info!("cancelled by user");
    } else {
        log::error!("{error}");
        eprintln!("{}", cli::render_error(error));
    }
    ExitCode::from(error.exit_code())
}

fn run_tui(
    config: &Config,
    git: &Arc<dyn GitProvider>,
    lookup: &Arc<dyn TicketLookup>,
) -> Result<ExitCode> {
    if !git.is_repository() {
        return Err(FlowError::from(GitError::NotARepository).into());
    }

    let lookup_available = lookup.is_available();
    if !lookup_available {
        log::warn!("jira CLI not available, titles must be entered manually");
    }

    let mut state = AppState::new(
        config.branch_type_items(),
        config.generator_config(),
        lookup_available,
    );
    let theme = Theme::from_config(&config.theme);

    let mut terminal = ratatui::init();
    let result = jiraflow_tui::run(&mut terminal, &mut state, git, lookup, &theme, &config.keys);
    ratatui::restore();

    match result? {
        WizardExit::Cancelled => Err(FlowError::Cancelled.into()),
        WizardExit::Completed(Outcome::Created { branch, base }) => {
            println!("✓ Created and switched to branch '{branch}' from '{base}'");
            Ok(ExitCode::SUCCESS)
        }
        WizardExit::Completed(Outcome::Failed {
            branch,
            message,
            exit_code,
            ..
        }) => {
            eprintln!("Error: failed to create branch '{branch}': {message}");
            Ok(ExitCode::from(exit_code))
        }
    }
}
