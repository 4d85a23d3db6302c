//! Per-repository orchestration.
//!
//! [`RepositoryProbe`] turns one [`RepositoryRef`] into one [`RepositoryResult`]. The order
//! of work matters: existence is checked before anything spawns a process, and a missing
//! GitHub remote is an ordinary outcome that leaves the row `ok` with zero counts.

use crate::core::{
    git::GitProbe,
    git_status::ProbeStatus,
    issues::IssueTrackerClient,
    remote::RemoteResolver,
    state::{IssueSummary, PullRequestSummary, RepositoryRef, RepositoryResult},
};

#[derive(Debug, Clone, Default)]
pub struct RepositoryProbe {
    git: GitProbe,
    remote: RemoteResolver,
    tracker: IssueTrackerClient,
}

impl RepositoryProbe {
    pub fn new(git: GitProbe, tracker: IssueTrackerClient) -> Self {
        Self {
            git,
            remote: RemoteResolver::new(git),
            tracker,
        }
    }

    pub async fn probe(&self, repo: RepositoryRef, include_remote: bool) -> RepositoryResult {
        if !self.git.exists(&repo.path) {
            log::debug!("{} has no git directory at {}", repo.name, repo.path.display());
            return RepositoryResult::missing(repo);
        }

        let (branch, changes, last_commit) = tokio::join!(
            self.git.current_branch(&repo.path),
            self.git.pending_change_count(&repo.path),
            self.git.last_commit(&repo.path),
        );

        let (issues, pull_requests) = if include_remote {
            match self.remote.resolve(&repo.path).await {
                Ok(identity) => self.tracker.fetch_summaries(&identity).await,
                Err(e) => {
                    log::debug!("Skipping remote lookup for {}: {e}", repo.name);
                    (IssueSummary::default(), PullRequestSummary::default())
                }
            }
        } else {
            (IssueSummary::default(), PullRequestSummary::default())
        };

        RepositoryResult {
            repo,
            status: ProbeStatus::Ok,
            branch,
            changes,
            last_commit_summary: last_commit.summary,
            last_commit_epoch: last_commit.epoch,
            issues,
            pull_requests,
        }
    }
}
