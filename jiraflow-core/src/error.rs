use crate::{
    branch::RefNameError, config::ConfigError, git::GitError, jira::LookupError,
    ticket::TicketError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Ticket(#[from] TicketError),
    #[error("invalid branch name '{name}': {source}")]
    RefName {
        name: String,
        #[source]
        source: RefNameError,
    },
    #[error("unknown branch type '{given}' (valid types: {})", .valid.join(", "))]
    UnknownBranchType { given: String, valid: Vec<String> },
}

/// Every failure the wizard or the non-interactive path can end with.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Repository(#[from] GitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cancelled by user")]
    Cancelled,
}

impl From<TicketError> for FlowError {
    fn from(e: TicketError) -> Self {
        Self::Validation(e.into())
    }
}

impl FlowError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Lookup(e) => match e {
                LookupError::Unavailable(_) => "Jira CLI is not installed or not in PATH".to_string(),
                LookupError::NotFound(ticket) => format!("Ticket {ticket} was not found"),
                LookupError::Failed { message, .. } if message.contains("authentication") => {
                    "Jira authentication failed".to_string()
                }
                other => other.to_string(),
            },
            Self::Repository(e) => match e {
                GitError::NotARepository => "This directory is not a Git repository".to_string(),
                GitError::BranchExists(_) => "A branch with this name already exists".to_string(),
                GitError::BaseMissing(base) => format!("Base branch '{base}' does not exist"),
                other => format!("Git operation failed: {other}"),
            },
            Self::Config(e) => match e {
                ConfigError::Invalid { field, message } => {
                    format!("Configuration issue with '{field}': {message}")
                }
                other => format!("Configuration issue: {other}"),
            },
            Self::Cancelled => "Cancelled".to_string(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        let list: &[&str] = match self {
            Self::Validation(ValidationError::Ticket(_)) => &[
                "Use the PROJECT-123 format (e.g., JIRA-123)",
                "Project keys are uppercase letters and digits",
            ],
            Self::Validation(ValidationError::RefName { .. }) => &[
                "Edit the ticket title to remove unusual characters",
                "Check the separator in your configuration",
            ],
            Self::Validation(ValidationError::UnknownBranchType { .. }) => &[
                "Pick one of the configured branch types",
                "Add the type under [branch_types] in your config file",
            ],
            Self::Lookup(LookupError::Unavailable(_)) => &[
                "Install Jira CLI from https://github.com/ankitpokhrel/jira-cli",
                "Ensure 'jira' command is in your PATH",
                "You can still use jiraflow by entering ticket titles manually",
            ],
            Self::Lookup(LookupError::NotFound(ticket)) => {
                return vec![
                    format!("Verify that ticket {ticket} exists in your Jira instance"),
                    "Check the ticket ID format (e.g., PROJ-123)".to_string(),
                    "You can proceed by entering the title manually".to_string(),
                ];
            }
            Self::Lookup(LookupError::Failed { message, .. })
                if message.contains("authentication") =>
            {
                &[
                    "Run 'jira init' to configure your Jira credentials",
                    "Check your Jira server URL and credentials",
                ]
            }
            Self::Lookup(_) => &[
                "Check your Jira CLI configuration",
                "You can continue without Jira integration",
            ],
            Self::Repository(GitError::NotARepository) => &[
                "Navigate to a Git repository directory",
                "Initialize a Git repository with 'git init'",
            ],
            Self::Repository(GitError::BranchExists(_)) => &[
                "Use a different ticket number or title",
                "Delete the existing branch if it's no longer needed",
            ],
            Self::Repository(GitError::BaseMissing(_)) => &[
                "Check that the base branch exists locally",
                "Fetch the latest branches with 'git fetch'",
            ],
            Self::Repository(_) => &[
                "Ensure you have proper Git permissions",
                "Commit or stash any uncommitted changes",
            ],
            Self::Config(e) => match e.field() {
                Some("branch_types") => &[
                    "Ensure every branch type key is a plain word such as 'feature'",
                    "Check the branch_types section in your config file",
                ],
                _ => &[
                    "Check your configuration file",
                    "Delete the config file to regenerate it with defaults",
                ],
            },
            Self::Cancelled => &[],
        };
        list.iter().map(ToString::to_string).collect()
    }

    /// Whether the user can fix the problem and carry on in the same run.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Lookup(_) | Self::Cancelled => true,
            Self::Repository(e) => {
                matches!(e, GitError::BranchExists(_) | GitError::BaseMissing(_))
            }
            Self::Config(_) => false,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Cancelled => 0,
            Self::Validation(_) => 1,
            Self::Config(_) => 2,
            Self::Repository(_) => 3,
            Self::Lookup(_) => 4,
        }
    }
}
