//! Core functionality for the repo-status tool.
//!
//! This module provides the probing engine (git and GitHub lookups, bounded fan-out),
//! the report data model, error handling and table rendering.

pub mod aggregator;
pub mod cache;
pub mod command;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod issues;
pub mod options;
pub mod output;
pub mod presenter;
pub mod probe;
pub mod remote;
pub mod state;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{RepoStatusError, Result};

// === Report model ===
// Strongly typed rows; every field is always present
pub use git_status::{ChangeCount, ProbeStatus};
pub use state::{
    GitHubIdentity, IssueSummary, PullRequestSummary, RepositoryRef, RepositoryResult,
};

// === Probing ===
// Git, remote and issue tracker lookups for a single repository
pub use git::{GitProbe, LastCommit};
pub use issues::IssueTrackerClient;
pub use probe::RepositoryProbe;
pub use remote::{parse_github_url, RemoteResolver};

// === Fan-out ===
// Bounded parallel probing of the whole repository list
pub use aggregator::{build_refs, run_all, run_all_with};
pub use options::{Filter, OutputFormat, RunOptions};

// === Presentation ===
pub use output::{print_error, print_hint, print_warning};
pub use presenter::{render, render_rows, select, truncate};
