use super::{BranchCandidate, GitError};

/// Version-control operations the wizard and the non-interactive path depend on.
pub trait GitProvider: Send + Sync {
    fn is_repository(&self) -> bool;
    fn list_local_branches(&self) -> Result<Vec<BranchCandidate>, GitError>;
    fn current_branch(&self) -> Result<String, GitError>;
    fn branch_exists(&self, name: &str) -> bool;
    /// Create `name` from `base` and check it out.
    fn create_and_switch_branch(&self, name: &str, base: &str) -> Result<(), GitError>;
}
