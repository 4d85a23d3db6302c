//! Open issue and pull request summaries from GitHub.
//!
//! This module provides [`IssueTrackerClient`], which lists open issues and pull requests
//! for one repository through the `gh` CLI and condenses them into [`IssueSummary`] and
//! [`PullRequestSummary`]. Transport and parse failures never reach the caller: they are
//! logged and turned into all-zero summaries.
//!
//! # Categorization
//! Labels are lowercased and matched by substring against fixed keyword lists. The three
//! issue categories are independent, so one issue can count as both a bug and urgent.
//! The match is a heuristic on purpose: a label named `not-a-bug` still counts as a bug.

use crate::core::{
    cache::{QueryKind, SummaryCache},
    command::run_command,
    error::Result,
    state::{GitHubIdentity, IssueSummary, PullRequestSummary},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

pub const BUG_KEYWORDS: &[&str] = &["bug", "error", "critical", "regression"];
pub const ENHANCEMENT_KEYWORDS: &[&str] = &["enhancement", "feature", "improvement", "request"];
pub const URGENT_KEYWORDS: &[&str] = &["critical", "urgent", "high"];

/// Review decision GitHub reports for PRs still waiting on a required review
pub const REVIEW_REQUIRED: &str = "REVIEW_REQUIRED";

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(15);
/// Upper bound on items listed per query; repositories with more open items report this cap
pub const DEFAULT_LIST_LIMIT: usize = 200;
pub const DEFAULT_PROGRAM: &str = "gh";
pub const DEFAULT_RETRIES: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenIssue {
    pub number: u64,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl OpenIssue {
    fn has_label_matching(&self, keywords: &[&str]) -> bool {
        self.labels.iter().any(|label| {
            let name = label.name.to_lowercase();
            keywords.iter().any(|keyword| name.contains(keyword))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPullRequest {
    pub number: u64,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub review_decision: Option<String>,
}

impl OpenPullRequest {
    /// Non-draft with no decision yet, or one explicitly waiting on a required review
    pub fn needs_review(&self) -> bool {
        if self.is_draft {
            return false;
        }
        match self.review_decision.as_deref() {
            None | Some("") => true,
            Some(decision) => decision == REVIEW_REQUIRED,
        }
    }
}

pub fn summarize_issues(issues: &[OpenIssue]) -> IssueSummary {
    IssueSummary {
        total: issues.len(),
        bugs: issues
            .iter()
            .filter(|i| i.has_label_matching(BUG_KEYWORDS))
            .count(),
        enhancements: issues
            .iter()
            .filter(|i| i.has_label_matching(ENHANCEMENT_KEYWORDS))
            .count(),
        urgent: issues
            .iter()
            .filter(|i| i.has_label_matching(URGENT_KEYWORDS))
            .count(),
    }
}

pub fn summarize_pull_requests(pulls: &[OpenPullRequest]) -> PullRequestSummary {
    PullRequestSummary {
        total: pulls.len(),
        drafts: pulls.iter().filter(|pr| pr.is_draft).count(),
        needs_review: pulls.iter().filter(|pr| pr.needs_review()).count(),
    }
}

#[derive(Debug, Clone)]
pub struct IssueTrackerClient {
    program: String,
    query_timeout: Duration,
    list_limit: usize,
    retries: u32,
    cache: Option<SummaryCache>,
}

impl Default for IssueTrackerClient {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT)
    }
}

impl IssueTrackerClient {
    pub fn new(query_timeout: Duration) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            query_timeout,
            list_limit: DEFAULT_LIST_LIMIT,
            retries: DEFAULT_RETRIES,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: SummaryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Run a different `gh`-compatible executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_list_limit(mut self, list_limit: usize) -> Self {
        self.list_limit = list_limit;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Fetch both summaries concurrently
    pub async fn fetch_summaries(
        &self,
        identity: &GitHubIdentity,
    ) -> (IssueSummary, PullRequestSummary) {
        tokio::join!(
            self.fetch_open_issues(identity),
            self.fetch_open_pull_requests(identity)
        )
    }

    pub async fn fetch_open_issues(&self, identity: &GitHubIdentity) -> IssueSummary {
        self.cached_or_fetch(identity, QueryKind::Issues, |issues: Vec<OpenIssue>| {
            summarize_issues(&issues)
        })
        .await
    }

    pub async fn fetch_open_pull_requests(&self, identity: &GitHubIdentity) -> PullRequestSummary {
        self.cached_or_fetch(
            identity,
            QueryKind::PullRequests,
            |pulls: Vec<OpenPullRequest>| summarize_pull_requests(&pulls),
        )
        .await
    }

    async fn cached_or_fetch<I, S, F>(
        &self,
        identity: &GitHubIdentity,
        kind: QueryKind,
        summarize: F,
    ) -> S
    where
        I: DeserializeOwned,
        S: Serialize + DeserializeOwned + Default,
        F: FnOnce(Vec<I>) -> S,
    {
        if let Some(cache) = &self.cache {
            if let Some(summary) = cache.get::<S>(identity, kind).await {
                return summary;
            }
        }

        match self.list_with_retries::<I>(identity, kind).await {
            Ok(items) => {
                let summary = summarize(items);
                if let Some(cache) = &self.cache {
                    if let Err(e) = cache.put(identity, kind, &summary).await {
                        log::warn!("Cache save failed for {}: {e}", identity.slug());
                    }
                }
                summary
            }
            Err(e) => {
                log::debug!(
                    "{} lookup for {} degraded to zero: {e}",
                    kind.as_str(),
                    identity.slug()
                );
                S::default()
            }
        }
    }

    async fn list_with_retries<I: DeserializeOwned>(
        &self,
        identity: &GitHubIdentity,
        kind: QueryKind,
    ) -> Result<Vec<I>> {
        let mut attempt = 0;
        loop {
            match self.list::<I>(identity, kind).await {
                Ok(items) => return Ok(items),
                Err(e) if e.is_timeout() || attempt >= self.retries => return Err(e),
                Err(e) => {
                    attempt += 1;
                    log::debug!(
                        "Retrying {} lookup for {} ({attempt}/{}): {e}",
                        kind.as_str(),
                        identity.slug(),
                        self.retries
                    );
                }
            }
        }
    }

    async fn list<I: DeserializeOwned>(
        &self,
        identity: &GitHubIdentity,
        kind: QueryKind,
    ) -> Result<Vec<I>> {
        let slug = identity.slug();
        let limit = self.list_limit.to_string();
        let (subcommand, fields) = match kind {
            QueryKind::Issues => ("issue", "number,labels"),
            QueryKind::PullRequests => ("pr", "number,isDraft,reviewDecision"),
        };
        let args = [
            subcommand,
            "list",
            "--repo",
            slug.as_str(),
            "--state",
            "open",
            "--json",
            fields,
            "--limit",
            limit.as_str(),
        ];

        let output = run_command(&self.program, &args, None, self.query_timeout).await?;
        let items: Vec<I> = serde_json::from_str(&output)?;
        if items.len() >= self.list_limit {
            log::debug!(
                "{} lookup for {slug} hit the list limit of {}, totals are capped",
                kind.as_str(),
                self.list_limit
            );
        }
        Ok(items)
    }
}
