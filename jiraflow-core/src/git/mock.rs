use super::{BranchCandidate, GitError, provider::GitProvider};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockGitProvider {
    pub not_a_repository: bool,
    pub branches: Vec<BranchCandidate>,
    /// One-shot override for the next `list_local_branches` call
    pub list_branches_result: Mutex<Option<Result<Vec<BranchCandidate>, GitError>>>,
    pub create_branch_result: Mutex<Option<Result<(), GitError>>>,
    /// `(name, base)` of every create call
    pub created: Mutex<Vec<(String, String)>>,
}

impl MockGitProvider {
    pub fn with_branches(names: &[&str], current: &str) -> Self {
        Self {
            branches: names
                .iter()
                .map(|name| BranchCandidate::new(*name, *name == current))
                .collect(),
            ..Default::default()
        }
    }
}

impl GitProvider for MockGitProvider {
    fn is_repository(&self) -> bool {
        !self.not_a_repository
    }

    fn list_local_branches(&self) -> Result<Vec<BranchCandidate>, GitError> {
        if self.not_a_repository {
            return Err(GitError::NotARepository);
        }
        self.list_branches_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(self.branches.clone()))
    }

    fn current_branch(&self) -> Result<String, GitError> {
        self.branches
            .iter()
            .find(|b| b.is_current)
            .map(|b| b.name.clone())
            .ok_or_else(|| GitError::CommandFailed {
                command: "git branch --show-current".to_string(),
                stderr: "HEAD is detached".to_string(),
            })
    }

    fn branch_exists(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b.name == name)
            || self.created.lock().unwrap().iter().any(|(n, _)| n == name)
    }

    fn create_and_switch_branch(&self, name: &str, base: &str) -> Result<(), GitError> {
        self.created
            .lock()
            .unwrap()
            .push((name.to_string(), base.to_string()));
        self.create_branch_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(()))
    }
}
