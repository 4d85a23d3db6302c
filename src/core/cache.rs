//! Time-limited on-disk cache for issue tracker summaries.
//!
//! The cache sits in front of [`crate::core::issues::IssueTrackerClient`] and never changes
//! its contract: a hit returns the summary fetched earlier, a miss falls through to the
//! network. Entries are keyed by `(owner, name, query kind)` and stored as one JSON file per
//! key under the user cache directory.
//!
//! # Cache Strategy
//! - **JSON serialization**: Human-readable entries for debugging
//! - **Timestamping**: Entries older than the TTL are ignored, not deleted
//! - **Success only**: Degraded zero summaries are never written

use crate::core::{
    dirs::get_cache_directory,
    error::{RepoStatusError, Result},
    state::GitHubIdentity,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Issues,
    PullRequests,
}

impl QueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::Issues => "issues",
            QueryKind::PullRequests => "pulls",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    fetched_at: DateTime<Utc>,
    summary: T,
}

#[derive(Debug, Clone)]
pub struct SummaryCache {
    dir: PathBuf,
    ttl: Duration,
}

impl SummaryCache {
    /// Cache rooted in the user cache directory
    pub fn open(ttl: Duration) -> Result<Self> {
        Ok(Self::with_dir(get_cache_directory()?, ttl))
    }

    pub fn with_dir(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    fn entry_path(&self, identity: &GitHubIdentity, kind: QueryKind) -> PathBuf {
        let key = format!("{}/{}/{}", identity.owner, identity.name, kind.as_str());
        self.dir.join(format!("{:x}.json", md5::compute(key.as_bytes())))
    }

    /// Fresh cached summary, if any. Unreadable or stale entries count as misses.
    pub async fn get<T: DeserializeOwned>(
        &self,
        identity: &GitHubIdentity,
        kind: QueryKind,
    ) -> Option<T> {
        let path = self.entry_path(identity, kind);
        let content = tokio::fs::read_to_string(&path).await.ok()?;

        let entry: CacheEntry<T> = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Ignoring unparsable cache entry '{}': {e}", path.display());
                return None;
            }
        };

        let age = Utc::now().signed_duration_since(entry.fetched_at);
        let ttl = chrono::Duration::from_std(self.ttl).ok()?;
        if age < chrono::Duration::zero() || age > ttl {
            log::debug!("Cache entry for {} {} is stale", identity.slug(), kind.as_str());
            return None;
        }

        log::debug!("Cache hit for {} {}", identity.slug(), kind.as_str());
        Some(entry.summary)
    }

    pub async fn put<T: Serialize>(
        &self,
        identity: &GitHubIdentity,
        kind: QueryKind,
        summary: &T,
    ) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RepoStatusError::cache_write_failed(&self.dir, e))?;

        let entry = CacheEntry {
            fetched_at: Utc::now(),
            summary,
        };
        let json = serde_json::to_string_pretty(&entry)?;

        let path = self.entry_path(identity, kind);
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| RepoStatusError::cache_write_failed(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{IssueSummary, PullRequestSummary};
    use tempfile::TempDir;

    fn identity() -> GitHubIdentity {
        GitHubIdentity {
            owner: "acme".to_string(),
            name: "widgets".to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_then_get_hits() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let cache = SummaryCache::with_dir(temp_dir.path(), Duration::from_secs(60));
        let summary = IssueSummary {
            total: 4,
            bugs: 2,
            enhancements: 1,
            urgent: 1,
        };

        cache.put(&identity(), QueryKind::Issues, &summary).await?;
        let cached: Option<IssueSummary> = cache.get(&identity(), QueryKind::Issues).await;
        assert_eq!(cached, Some(summary));
        Ok(())
    }

    #[tokio::test]
    async fn test_kinds_do_not_collide() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let cache = SummaryCache::with_dir(temp_dir.path(), Duration::from_secs(60));
        cache
            .put(&identity(), QueryKind::Issues, &IssueSummary::default())
            .await?;

        let prs: Option<PullRequestSummary> =
            cache.get(&identity(), QueryKind::PullRequests).await;
        assert_eq!(prs, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_stale_entry_is_a_miss() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let cache = SummaryCache::with_dir(temp_dir.path(), Duration::from_secs(60));
        let entry = CacheEntry {
            fetched_at: Utc::now() - chrono::Duration::hours(2),
            summary: PullRequestSummary {
                total: 1,
                drafts: 0,
                needs_review: 1,
            },
        };
        let path = cache.entry_path(&identity(), QueryKind::PullRequests);
        std::fs::write(&path, serde_json::to_string(&entry)?)?;

        let cached: Option<PullRequestSummary> =
            cache.get(&identity(), QueryKind::PullRequests).await;
        assert_eq!(cached, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let cache = SummaryCache::with_dir(temp_dir.path(), Duration::from_secs(60));
        std::fs::write(cache.entry_path(&identity(), QueryKind::Issues), "{ nope")?;

        let cached: Option<IssueSummary> = cache.get(&identity(), QueryKind::Issues).await;
        assert_eq!(cached, None);
        Ok(())
    }
}
