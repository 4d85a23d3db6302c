//! GitHub identity resolution from a repository's `origin` remote.
//!
//! Accepted URL shapes are `https://github.com/<owner>/<repo>(.git)?` and
//! `<user>@github.com:<owner>/<repo>(.git)?`. The host test is a substring match; the
//! separator right after the host must be `/` or `:`, and the first two path segments
//! that follow are the owner and the repository name.

use crate::core::{
    error::{RepoStatusError, Result},
    git::GitProbe,
    state::GitHubIdentity,
};
use std::path::Path;

pub const GITHUB_HOST: &str = "github.com";

/// Parse an origin URL into a [`GitHubIdentity`]
pub fn parse_github_url(url: &str) -> Result<GitHubIdentity> {
    let url = url.trim();
    let host_at = url.find(GITHUB_HOST).ok_or(RepoStatusError::RemoteNotFound)?;
    let after_host = &url[host_at + GITHUB_HOST.len()..];

    let path = after_host
        .strip_prefix('/')
        .or_else(|| after_host.strip_prefix(':'))
        .ok_or(RepoStatusError::RemoteNotFound)?;

    let mut segments = path.split('/');
    let owner = segments.next().unwrap_or_default();
    let repo = segments.next().unwrap_or_default();
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if owner.is_empty() || repo.is_empty() {
        return Err(RepoStatusError::RemoteNotFound);
    }

    Ok(GitHubIdentity {
        owner: owner.to_string(),
        name: repo.to_string(),
    })
}

/// Reads `remote.origin.url` once and parses it
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteResolver {
    git: GitProbe,
}

impl RemoteResolver {
    pub fn new(git: GitProbe) -> Self {
        Self { git }
    }

    pub async fn resolve(&self, path: &Path) -> Result<GitHubIdentity> {
        let url = self
            .git
            .origin_url(path)
            .await
            .ok_or(RepoStatusError::RemoteNotFound)?;
        parse_github_url(&url)
    }
}
