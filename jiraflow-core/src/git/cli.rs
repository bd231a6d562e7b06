use super::{BranchCandidate, GitError, parse_branch_list, provider::GitProvider};
use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

/// Shells out to the `git` binary inside `workdir`.
pub struct CliGitProvider {
    workdir: PathBuf,
}

impl Default for CliGitProvider {
    fn default() -> Self {
        Self::new(".")
    }
}

impl CliGitProvider {
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<Output, GitError> {
        log::debug!("running git {}", args.join(" "));
        Ok(Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?)
    }

    fn git_checked(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.git(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.contains("not a git repository") {
                return Err(GitError::NotARepository);
            }
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                stderr,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitProvider for CliGitProvider {
    fn is_repository(&self) -> bool {
        self.git(&["rev-parse", "--git-dir"])
            .is_ok_and(|output| output.status.success())
    }

    fn list_local_branches(&self) -> Result<Vec<BranchCandidate>, GitError> {
        let stdout = self.git_checked(&["branch", "--format=%(HEAD) %(refname:short)"])?;
        Ok(parse_branch_list(&stdout))
    }

    fn current_branch(&self) -> Result<String, GitError> {
        let stdout = self.git_checked(&["branch", "--show-current"])?;
        let name = stdout.trim();
        if name.is_empty() {
            return Err(GitError::CommandFailed {
                command: "git branch --show-current".to_string(),
                stderr: "HEAD is detached".to_string(),
            });
        }
        Ok(name.to_string())
    }

    fn branch_exists(&self, name: &str) -> bool {
        let reference = format!("refs/heads/{name}");
        self.git(&["show-ref", "--verify", "--quiet", &reference])
            .is_ok_and(|output| output.status.success())
    }

    fn create_and_switch_branch(&self, name: &str, base: &str) -> Result<(), GitError> {
        if self.branch_exists(name) {
            return Err(GitError::BranchExists(name.to_string()));
        }
        if !self.branch_exists(base) {
            return Err(GitError::BaseMissing(base.to_string()));
        }

        match self.git_checked(&["checkout", "-b", name, base]) {
            Ok(_) => {
                log::info!("created branch {name} from {base}");
                Ok(())
            }
            Err(GitError::CommandFailed { stderr, .. }) if stderr.contains("already exists") => {
                Err(GitError::BranchExists(name.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}
