use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn jiraflow_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jiraflow"))
}

fn git(dir: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn init_test_repo(dir: &Path) {
    git(dir, &["init", "--initial-branch=main"]);
    git(dir, &["config", "user.email", "test@test.com"]);
    git(dir, &["config", "user.name", "Test"]);
    fs::write(dir.join("README.md"), "# test").unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", "init"]);
}

fn current_branch(dir: &Path) -> String {
    String::from_utf8_lossy(&git(dir, &["branch", "--show-current"]).stdout)
        .trim()
        .to_string()
}

struct TestEnv {
    tmp: tempfile::TempDir,
    repo: PathBuf,
    config_file: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let repo = tmp.path().join("repo");
        fs::create_dir_all(&repo).unwrap();
        let config_file = tmp.path().join("config.toml");
        fs::write(&config_file, "max_branch_length = 60\n").unwrap();
        Self {
            tmp,
            repo,
            config_file,
        }
    }

    fn with_repo() -> Self {
        let env = Self::new();
        init_test_repo(&env.repo);
        env
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(jiraflow_binary())
            .arg("--config")
            .arg(&self.config_file)
            .args(args)
            .current_dir(&self.repo)
            .env("XDG_CONFIG_HOME", self.tmp.path().join("config"))
            .env("XDG_CACHE_HOME", self.tmp.path().join("cache"))
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_e2e_dry_run_prints_preview() {
    let env = TestEnv::with_repo();
    let output = env.run(&[
        "--ticket",
        "PROJ-42",
        "--title",
        "Add OAuth login!",
        "--dry-run",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Branch preview (dry run)"), "stdout: {out}");
    assert!(out.contains("branch: feature/PROJ-42-add-oauth-login"), "stdout: {out}");
    assert_eq!(current_branch(&env.repo), "main");
}

#[test]
fn test_e2e_creates_and_switches_branch() {
    let env = TestEnv::with_repo();
    let output = env.run(&[
        "--type",
        "hotfix",
        "--base",
        "main",
        "--ticket",
        "OPS-7",
        "--title",
        "Fix crash on startup",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created and switched to branch 'hotfix/OPS-7-fix-crash-on-startup'"));
    assert_eq!(current_branch(&env.repo), "hotfix/OPS-7-fix-crash-on-startup");
}

#[test]
fn test_e2e_invalid_ticket_is_validation_error() {
    let env = TestEnv::with_repo();
    let output = env.run(&["--ticket", "proj-42", "--title", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("PROJECT-123"), "stderr: {}", stderr(&output));
}

#[test]
fn test_e2e_unknown_type_lists_valid_types() {
    let env = TestEnv::with_repo();
    let output = env.run(&["--type", "epic", "--ticket", "PROJ-1", "--title", "x"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("feature, hotfix, refactor, support"));
}

#[test]
fn test_e2e_existing_branch_is_repository_error() {
    let env = TestEnv::with_repo();
    git(&env.repo, &["branch", "feature/PROJ-1-dup"]);
    let output = env.run(&["--ticket", "PROJ-1", "--title", "Dup"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("already exists"), "stderr: {}", stderr(&output));
    assert_eq!(current_branch(&env.repo), "main");
}

#[test]
fn test_e2e_outside_repository_fails() {
    let env = TestEnv::new();
    let output = env.run(&["--ticket", "PROJ-1", "--title", "x"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Suggestions:"), "stderr: {}", stderr(&output));
}

#[test]
fn test_e2e_missing_config_override_is_config_error() {
    let env = TestEnv::with_repo();
    let output = Command::new(jiraflow_binary())
        .args(["--config", "/nonexistent/jiraflow.toml", "--ticket", "PROJ-1"])
        .current_dir(&env.repo)
        .env("XDG_CACHE_HOME", env.tmp.path().join("cache"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
