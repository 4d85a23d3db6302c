//! Bounded parallel fan-out over all monitored repositories.
//!
//! [`run_all`] dispatches one task per repository onto a [`JoinSet`], gated by a
//! [`Semaphore`] so at most `max_concurrency` probes are in flight. Each probe gets its own
//! timeout once it holds a permit. Whatever happens to a single task (timeout, panic) its
//! slot is filled with a `status = error` row, so the batch always returns exactly one row
//! per input, in input order.

use crate::core::{
    error::{RepoStatusError, Result},
    options::RunOptions,
    probe::RepositoryProbe,
    state::{RepositoryRef, RepositoryResult},
};
use std::collections::HashSet;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Resolve repository names against `base_path`, failing fast if the base is unusable.
///
/// Duplicate names are dropped after their first occurrence.
pub fn build_refs(names: &[String], base_path: &Path) -> Result<Vec<RepositoryRef>> {
    if std::fs::read_dir(base_path).is_err() {
        return Err(RepoStatusError::base_path_not_found(base_path));
    }

    let mut seen = HashSet::new();
    let mut refs = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_string()) {
            log::warn!("Repository '{name}' listed more than once, ignoring duplicate");
            continue;
        }
        refs.push(RepositoryRef::new(name, base_path));
    }
    Ok(refs)
}

/// Probe every repository with the default git and GitHub backends
pub async fn run_all(
    refs: Vec<RepositoryRef>,
    options: &RunOptions,
    probe: RepositoryProbe,
) -> Result<Vec<RepositoryResult>> {
    let probe = Arc::new(probe);
    let include_remote = options.include_remote;

    run_all_with(refs, options, move |repo| {
        let probe = Arc::clone(&probe);
        async move { probe.probe(repo, include_remote).await }
    })
    .await
}

/// Fan `refs` out to `probe_fn` under the concurrency bound and per-unit timeout
pub async fn run_all_with<F, Fut>(
    refs: Vec<RepositoryRef>,
    options: &RunOptions,
    probe_fn: F,
) -> Result<Vec<RepositoryResult>>
where
    F: Fn(RepositoryRef) -> Fut,
    Fut: Future<Output = RepositoryResult> + Send + 'static,
{
    options.validate()?;

    let semaphore = Arc::new(Semaphore::new(options.max_concurrency));
    let timeout = options.per_unit_timeout;
    let mut join_set: JoinSet<(usize, RepositoryResult)> = JoinSet::new();

    for (index, repo) in refs.iter().enumerate() {
        let permit = Arc::clone(&semaphore);
        let work = probe_fn(repo.clone());
        let repo = repo.clone();

        join_set.spawn(async move {
            let _permit = match permit.acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    log::warn!("Failed to acquire probe slot for {}: {e}", repo.name);
                    return (index, RepositoryResult::error(repo));
                }
            };

            match tokio::time::timeout(timeout, work).await {
                Ok(result) => (index, result),
                Err(_) => {
                    log::warn!("Probe for {} timed out after {timeout:?}", repo.name);
                    (index, RepositoryResult::error(repo))
                }
            }
        });
    }

    let mut slots: Vec<Option<RepositoryResult>> = (0..refs.len()).map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result),
            Err(e) => log::warn!("Probe task failed: {e}"),
        }
    }

    let results: Vec<RepositoryResult> = refs
        .into_iter()
        .zip(slots)
        .map(|(repo, slot)| slot.unwrap_or_else(|| RepositoryResult::error(repo)))
        .collect();

    let degraded = results.iter().filter(|r| !r.status.is_ok()).count();
    log::info!(
        "Probed {} repositories ({} degraded)",
        results.len(),
        degraded
    );

    Ok(results)
}
