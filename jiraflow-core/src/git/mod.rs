pub mod cli;
pub mod mock;
pub mod provider;

pub use cli::CliGitProvider;
pub use provider::GitProvider;

use thiserror::Error;

/// A local branch as reported by git. Remote-tracking refs never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCandidate {
    pub name: String,
    pub is_current: bool,
}

impl BranchCandidate {
    pub fn new(name: impl Into<String>, is_current: bool) -> Self {
        Self {
            name: name.into(),
            is_current,
        }
    }
}

#[derive(Debug, Error)]
pub enum GitError {
    #[error("not a git repository")]
    NotARepository,
    #[error("branch '{0}' already exists")]
    BranchExists(String),
    #[error("base branch '{0}' does not exist")]
    BaseMissing(String),
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse `git branch --format='%(HEAD) %(refname:short)'` output.
pub fn parse_branch_list(output: &str) -> Vec<BranchCandidate> {
    output
        .lines()
        .filter_map(|line| {
            let (marker, name) = line.split_at_checked(2)?;
            let name = name.trim();
            // Detached HEAD shows up as "(HEAD detached at ...)"
            if name.is_empty() || name.starts_with('(') {
                return None;
            }
            Some(BranchCandidate::new(name, marker.starts_with('*')))
        })
        .collect()
}
