//! Report data structures.
//!
//! This module defines the records that flow from the probes to the presenter. Every
//! numeric field is always present: absence is modelled with zero summaries and the
//! [`ChangeCount::Missing`] marker instead of optional fields.
//!
//! # Public API
//! - [`RepositoryRef`]: One monitored repository (name + resolved path)
//! - [`RepositoryResult`]: One row of the report
//! - [`IssueSummary`] / [`PullRequestSummary`]: Aggregated counts from the issue tracker
//! - [`GitHubIdentity`]: `(owner, repo)` pair parsed from an origin URL

use crate::core::git_status::{ChangeCount, ProbeStatus};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Repository name that stands for the enclosing workspace repository itself
pub const ROOT_REPOSITORY: &str = ".";

/// Label shown instead of [`ROOT_REPOSITORY`]
pub const ROOT_DISPLAY_NAME: &str = "(root)";

/// Placeholder for branch and commit fields that could not be read
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRef {
    pub name: String,
    pub path: PathBuf,
}

impl RepositoryRef {
    /// Resolve `name` against `base_path`. The root sentinel maps to `base_path` itself.
    pub fn new(name: impl Into<String>, base_path: &Path) -> Self {
        let name = name.into();
        let path = if name == ROOT_REPOSITORY {
            base_path.to_path_buf()
        } else {
            base_path.join(&name)
        };
        Self { name, path }
    }

    pub fn is_root(&self) -> bool {
        self.name == ROOT_REPOSITORY
    }

    pub fn display_name(&self) -> &str {
        if self.is_root() {
            ROOT_DISPLAY_NAME
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub total: usize,
    pub bugs: usize,
    pub enhancements: usize,
    pub urgent: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSummary {
    pub total: usize,
    pub drafts: usize,
    pub needs_review: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitHubIdentity {
    pub owner: String,
    pub name: String,
}

impl GitHubIdentity {
    /// `owner/name`, the form `gh --repo` expects
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryResult {
    #[serde(rename = "repository")]
    pub repo: RepositoryRef,
    pub status: ProbeStatus,
    pub branch: String,
    pub changes: ChangeCount,
    pub last_commit_summary: String,
    pub last_commit_epoch: i64,
    pub issues: IssueSummary,
    pub pull_requests: PullRequestSummary,
}

impl RepositoryResult {
    /// A row with every field at its placeholder value
    pub fn degraded(repo: RepositoryRef, status: ProbeStatus) -> Self {
        Self {
            repo,
            status,
            branch: UNKNOWN.to_string(),
            changes: ChangeCount::Missing,
            last_commit_summary: UNKNOWN.to_string(),
            last_commit_epoch: 0,
            issues: IssueSummary::default(),
            pull_requests: PullRequestSummary::default(),
        }
    }

    pub fn missing(repo: RepositoryRef) -> Self {
        Self::degraded(repo, ProbeStatus::Missing)
    }

    pub fn error(repo: RepositoryRef) -> Self {
        Self::degraded(repo, ProbeStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_ref_uses_base_path() {
        let base = Path::new("/work/ecosystem");
        let root = RepositoryRef::new(".", base);
        assert_eq!(root.path, PathBuf::from("/work/ecosystem"));
        assert!(root.is_root());
        assert_eq!(root.display_name(), ROOT_DISPLAY_NAME);
    }

    #[test]
    fn test_named_ref_joins_base_path() {
        let repo = RepositoryRef::new("templates", Path::new("/work/ecosystem"));
        assert_eq!(repo.path, PathBuf::from("/work/ecosystem/templates"));
        assert_eq!(repo.display_name(), "templates");
    }

    #[test]
    fn test_missing_result_sentinels() {
        let repo = RepositoryRef::new("gone", Path::new("/nowhere"));
        let result = RepositoryResult::missing(repo);
        assert_eq!(result.status, ProbeStatus::Missing);
        assert_eq!(result.changes, ChangeCount::Missing);
        assert_eq!(result.issues, IssueSummary::default());
        assert_eq!(result.pull_requests, PullRequestSummary::default());
        assert_eq!(result.last_commit_epoch, 0);
    }

    #[test]
    fn test_identity_slug() {
        let id = GitHubIdentity {
            owner: "acme".to_string(),
            name: "widgets".to_string(),
        };
        assert_eq!(id.slug(), "acme/widgets");
    }
}
