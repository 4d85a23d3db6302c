use crate::core::{
    aggregator::{build_refs, run_all},
    cache::SummaryCache,
    config::WorkspaceConfig,
    error::{RepoStatusError, Result},
    git::GitProbe,
    git_status::ProbeStatus,
    issues::IssueTrackerClient,
    options::{Filter, OutputFormat, RunOptions},
    output::{print_hint, print_warning},
    presenter::{render, select},
    probe::RepositoryProbe,
    state::{RepositoryResult, ROOT_REPOSITORY},
};
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug, Default, Clone)]
pub struct StatusArgs {
    /// Repositories to check, relative to the base directory ("." is the base itself)
    pub repositories: Vec<String>,

    /// Directory the repository names are resolved against [default: current directory]
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Config file with the repository list and defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Untruncated, verbose table
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Skip GitHub issue and PR lookups
    #[arg(long = "fast", visible_alias = "no-remote")]
    pub no_remote: bool,

    /// Only repositories with urgent issues
    #[arg(long)]
    pub urgent_issues: bool,

    /// Only repositories with open pull requests
    #[arg(long)]
    pub with_prs: bool,

    /// Only repositories with pull requests waiting for review
    #[arg(long)]
    pub needs_review: bool,

    /// Most recently committed repositories first
    #[arg(short = 'r', long)]
    pub sort_recent: bool,

    /// Maximum repositories probed at once [default: 8]
    #[arg(long)]
    pub max_concurrency: Option<usize>,

    /// Seconds allowed per repository [default: 30]
    #[arg(long = "timeout")]
    pub timeout_secs: Option<u64>,

    /// Reuse GitHub summaries younger than this many seconds (0 disables)
    #[arg(long = "cache-ttl")]
    pub cache_ttl_secs: Option<u64>,

    /// Print the filtered rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Everything a run needs, after merging CLI arguments with the config file
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRun {
    pub repositories: Vec<String>,
    pub base_path: PathBuf,
    pub options: RunOptions,
}

/// CLI arguments win over config values, which win over built-in defaults
pub fn resolve_run(args: &StatusArgs, config: &WorkspaceConfig) -> Result<ResolvedRun> {
    let repositories = if !args.repositories.is_empty() {
        args.repositories.clone()
    } else if !config.repositories.is_empty() {
        config.repositories.clone()
    } else {
        vec![ROOT_REPOSITORY.to_string()]
    };

    let base_path = match args.base_dir.clone().or_else(|| config.base_dir.clone()) {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let mut filters = BTreeSet::new();
    if args.urgent_issues {
        filters.insert(Filter::UrgentIssuesOnly);
    }
    if args.with_prs {
        filters.insert(Filter::WithOpenPrsOnly);
    }
    if args.needs_review {
        filters.insert(Filter::NeedsReviewOnly);
    }

    let defaults = RunOptions::default();
    let cache_ttl = args
        .cache_ttl_secs
        .or(config.cache_ttl_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    let options = RunOptions {
        include_remote: !args.no_remote,
        max_concurrency: args
            .max_concurrency
            .or(config.max_concurrency)
            .unwrap_or(defaults.max_concurrency),
        per_unit_timeout: args
            .timeout_secs
            .or(config.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.per_unit_timeout),
        format: if args.long {
            OutputFormat::Long
        } else {
            OutputFormat::Compact
        },
        filters,
        sort_by_recency: args.sort_recent,
        cache_ttl,
    };
    options.validate()?;

    Ok(ResolvedRun {
        repositories,
        base_path,
        options,
    })
}

fn build_probe(options: &RunOptions) -> RepositoryProbe {
    let mut tracker = IssueTrackerClient::default();
    if let Some(ttl) = options.cache_ttl {
        match SummaryCache::open(ttl) {
            Ok(cache) => tracker = tracker.with_cache(cache),
            Err(e) => log::warn!("Summary cache disabled: {e}"),
        }
    }
    RepositoryProbe::new(GitProbe::default(), tracker)
}

pub async fn execute_status(args: StatusArgs) -> Result<()> {
    let config = WorkspaceConfig::load_or_default(args.config.as_deref())?;
    let run = resolve_run(&args, &config)?;

    let refs = build_refs(&run.repositories, &run.base_path)?;
    if refs.is_empty() {
        return Err(RepoStatusError::NoRepositories);
    }

    log::debug!(
        "Checking {} repositories under {}",
        refs.len(),
        run.base_path.display()
    );

    let probe = build_probe(&run.options);
    let results = run_all(refs, &run.options, probe).await?;

    if args.json {
        let rows = select(&results, &run.options);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render(&results, &run.options));
    }

    if let Some(warning) = failure_warning(&results) {
        print_warning(&warning);
        print_hint("Run with --debug for details, or raise --timeout");
    }

    Ok(())
}

/// Rows in the error state come from timeouts and failed tasks alike
fn failure_warning(results: &[RepositoryResult]) -> Option<String> {
    let failed = results
        .iter()
        .filter(|r| r.status == ProbeStatus::Error)
        .count();
    (failed > 0).then(|| format!("{failed} repositories could not be probed"))
}
