//! Workspace and repository setup utilities
//!
//! Provides functions for creating a temporary base directory holding several git
//! repositories in different states.

#![allow(dead_code)]

use repo_status::core::error::{RepoStatusError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary base directory. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

/// Creates an empty base directory
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestWorkspace { temp_dir, path })
}

/// Runs a git command in `repo_path`, failing the helper on non-zero exit
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        return Err(RepoStatusError::command_failed(
            "git",
            args,
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }
    Ok(())
}

/// Initializes a git repository at `path` with test identity config
pub fn init_repo(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    git(path, &["init"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "commit.gpgsign", "false"])?;
    Ok(())
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Adds everything and commits with the given message
pub fn commit_all(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["add", "."])?;
    git(repo_path, &["commit", "-m", message])?;
    Ok(())
}

/// Commits with a fixed committer date so recency ordering is deterministic
pub fn commit_all_at(repo_path: &Path, message: &str, epoch: i64) -> Result<()> {
    git(repo_path, &["add", "."])?;
    let date = format!("{epoch} +0000");
    let output = std::process::Command::new("git")
        .args(["commit", "-m", message])
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .current_dir(repo_path)
        .output()?;
    if !output.status.success() {
        return Err(RepoStatusError::command_failed(
            "git",
            &["commit", "-m", message],
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }
    Ok(())
}
