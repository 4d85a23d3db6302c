//! Repo Status - one table summarising git and GitHub state across a family of repositories.
//!
//! This library provides the probing engine behind the `repo-status` binary: for every
//! repository in a list it reads local git metadata and, optionally, open issue and pull
//! request counts from GitHub, with bounded concurrency and a timeout per repository.
//! Failures stay inside the row they affect.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Repository references and report rows
//! - Git, remote and issue tracker probes
//! - The bounded fan-out ([`run_all`])
//! - Filtering and table rendering ([`render`])

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    build_refs,
    parse_github_url,
    // Presentation
    render,
    render_rows,
    // Fan-out
    run_all,
    run_all_with,
    select,
    truncate,

    ChangeCount,
    Filter,
    GitHubIdentity,
    // Probing
    GitProbe,
    IssueSummary,
    IssueTrackerClient,
    OutputFormat,
    ProbeStatus,
    PullRequestSummary,
    RemoteResolver,
    // Error handling
    RepoStatusError,
    RepositoryProbe,
    // Report model
    RepositoryRef,
    RepositoryResult,
    Result,
    RunOptions,
};
