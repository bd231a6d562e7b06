use crate::{
    git::{BranchCandidate, GitError},
    jira::LookupError,
};

/// Events that arrive asynchronously from background tasks.
/// These get merged into the main event loop alongside keyboard input.
#[derive(Debug)]
pub enum AppEvent {
    /// Local branch listing finished
    BranchesLoaded(Result<Vec<BranchCandidate>, GitError>),

    /// Title lookup finished, tagged with the ticket id it was requested for
    TitleFetched {
        ticket_id: String,
        result: Result<String, LookupError>,
    },

    BranchCreated { name: String, base: String },

    BranchCreateFailed { name: String, error: GitError },
}
