//! Run options shared by the aggregator and the presenter.
//!
//! # Public API
//! - [`RunOptions`]: Typed option set for one invocation
//! - [`OutputFormat`]: Compact (fixed width) or long (variable width) table
//! - [`Filter`]: Post-aggregation row predicates

use crate::core::error::{RepoStatusError, Result};
use crate::core::state::RepositoryResult;
use std::collections::BTreeSet;
use std::time::Duration;

pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
pub const DEFAULT_UNIT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Compact,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Filter {
    UrgentIssuesOnly,
    WithOpenPrsOnly,
    NeedsReviewOnly,
}

impl Filter {
    pub fn matches(self, result: &RepositoryResult) -> bool {
        match self {
            Filter::UrgentIssuesOnly => result.issues.urgent > 0,
            Filter::WithOpenPrsOnly => result.pull_requests.total > 0,
            Filter::NeedsReviewOnly => result.pull_requests.needs_review > 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub include_remote: bool,
    pub max_concurrency: usize,
    pub per_unit_timeout: Duration,
    pub format: OutputFormat,
    pub filters: BTreeSet<Filter>,
    pub sort_by_recency: bool,
    /// Reuse issue/PR summaries younger than this; `None` disables the cache
    pub cache_ttl: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            include_remote: true,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            per_unit_timeout: DEFAULT_UNIT_TIMEOUT,
            format: OutputFormat::Compact,
            filters: BTreeSet::new(),
            sort_by_recency: false,
            cache_ttl: None,
        }
    }
}

impl RunOptions {
    /// Reject option sets that cannot run before any work is dispatched
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrency == 0 {
            return Err(RepoStatusError::InvalidConcurrency {
                value: self.max_concurrency,
            });
        }
        if self.per_unit_timeout.is_zero() {
            return Err(RepoStatusError::InvalidTimeout);
        }
        Ok(())
    }

    /// True iff the result passes every active filter
    pub fn keeps(&self, result: &RepositoryResult) -> bool {
        self.filters.iter().all(|filter| filter.matches(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::RepositoryRef;
    use std::path::Path;

    fn result_with(urgent: usize, prs: usize, needs_review: usize) -> RepositoryResult {
        let mut result = RepositoryResult::error(RepositoryRef::new("r", Path::new("/tmp")));
        result.issues.urgent = urgent;
        result.pull_requests.total = prs;
        result.pull_requests.needs_review = needs_review;
        result
    }

    #[test]
    fn test_default_options_are_valid() {
        assert!(RunOptions::default().validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let options = RunOptions {
            max_concurrency: 0,
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(RepoStatusError::InvalidConcurrency { value: 0 })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let options = RunOptions {
            per_unit_timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(RepoStatusError::InvalidTimeout)));
    }

    #[test]
    fn test_no_filters_keep_everything() {
        assert!(RunOptions::default().keeps(&result_with(0, 0, 0)));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let options = RunOptions {
            filters: [Filter::WithOpenPrsOnly, Filter::NeedsReviewOnly]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        assert!(options.keeps(&result_with(0, 2, 1)));
        assert!(!options.keeps(&result_with(0, 2, 0)));
        assert!(!options.keeps(&result_with(5, 0, 0)));
    }
}
