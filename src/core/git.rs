//! Read-only git inspection of a single working tree.
//!
//! This module provides [`GitProbe`], which answers a handful of independent questions
//! about one repository by shelling out to the `git` binary. Every query tolerates the
//! path not being a repository: failures degrade to the query's placeholder value and are
//! only logged, so one broken repository can never abort a batch.
//!
//! # Public API
//! - [`GitProbe`]: Branch, pending changes, last commit and origin URL lookups
//! - [`LastCommit`]: Display summary plus raw timestamp of the HEAD commit
//!
//! # Key Features
//! - **Existence gate**: [`GitProbe::exists`] is a plain filesystem check; every other query
//!   returns its placeholder without spawning a process when it is false
//! - **Bounded**: each command runs under the probe's command timeout

use crate::core::{
    command::run_command,
    git_status::ChangeCount,
    state::UNKNOWN,
};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Summary and Unix timestamp of the most recent commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommit {
    pub summary: String,
    pub epoch: i64,
}

impl LastCommit {
    pub fn unknown() -> Self {
        Self {
            summary: UNKNOWN.to_string(),
            epoch: 0,
        }
    }

    /// Parse `git log -1 --format=%h|%ct|%cr` output
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.trim().splitn(3, '|');
        let hash = parts.next().filter(|h| !h.is_empty())?;
        let epoch = parts.next()?.parse::<i64>().ok()?;
        let relative = parts.next()?;
        Some(Self {
            summary: format!("{hash} {relative}"),
            epoch,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GitProbe {
    command_timeout: Duration,
}

impl Default for GitProbe {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_TIMEOUT)
    }
}

impl GitProbe {
    pub fn new(command_timeout: Duration) -> Self {
        Self { command_timeout }
    }

    /// True iff `path` is a directory holding a `.git` entry (directory, or file for worktrees)
    pub fn exists(&self, path: &Path) -> bool {
        path.is_dir() && path.join(".git").exists()
    }

    async fn git(&self, path: &Path, args: &[&str]) -> Option<String> {
        match run_command("git", args, Some(path), self.command_timeout).await {
            Ok(out) => Some(out),
            Err(e) => {
                log::debug!("git query failed in {}: {e}", path.display());
                None
            }
        }
    }

    /// Checked-out branch, or [`UNKNOWN`] when detached or unreadable
    pub async fn current_branch(&self, path: &Path) -> String {
        if !self.exists(path) {
            return UNKNOWN.to_string();
        }
        match self.git(path, &["branch", "--show-current"]).await {
            Some(branch) if !branch.trim().is_empty() => branch.trim().to_string(),
            _ => UNKNOWN.to_string(),
        }
    }

    /// One entry per line of `git status --porcelain`
    pub async fn pending_change_count(&self, path: &Path) -> ChangeCount {
        if !self.exists(path) {
            return ChangeCount::Missing;
        }
        match self.git(path, &["status", "--porcelain"]).await {
            Some(listing) => ChangeCount::Count(count_status_lines(&listing)),
            None => ChangeCount::Missing,
        }
    }

    /// HEAD commit as `<short hash> <relative time>`; unknown for repositories without commits
    pub async fn last_commit(&self, path: &Path) -> LastCommit {
        if !self.exists(path) {
            return LastCommit::unknown();
        }
        self.git(path, &["log", "-1", "--format=%h|%ct|%cr"])
            .await
            .and_then(|line| LastCommit::parse(&line))
            .unwrap_or_else(LastCommit::unknown)
    }

    /// Configured `origin` URL, if any
    pub async fn origin_url(&self, path: &Path) -> Option<String> {
        if !self.exists(path) {
            return None;
        }
        self.git(path, &["config", "--get", "remote.origin.url"])
            .await
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }
}

fn count_status_lines(listing: &str) -> usize {
    listing.lines().filter(|line| !line.trim().is_empty()).count()
}
