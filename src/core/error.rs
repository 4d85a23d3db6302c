//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`RepoStatusError`] which covers every failure repo-status can
//! observe. Most of these never reach the caller: per-repository failures are absorbed
//! into sentinel values by the probes, so only configuration errors escape
//! [`crate::core::aggregator::run_all`].
//!
//! # Public API
//! - [`RepoStatusError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, RepoStatusError>`
//!
//! # Error Categories
//! - **Configuration**: Invalid run options, unusable base path, config file problems
//! - **External commands**: Spawn failures, non-zero exits, timeouts
//! - **Remote lookup**: Missing or unsupported origin remote
//! - **Cache operations**: Directory, read, write and parse failures

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Domain-specific error types for repo-status
#[derive(Error, Debug)]
pub enum RepoStatusError {
    // Configuration errors
    #[error("max concurrency must be at least 1 (got {value})")]
    InvalidConcurrency { value: usize },

    #[error("per-repository timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Base path is not a readable directory: {path}")]
    BasePathNotFound { path: PathBuf },

    #[error("No repositories to check")]
    NoRepositories,

    #[error("Config file does not exist: {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // External command errors
    #[error("`{program} {args}` failed: {stderr}")]
    CommandFailed {
        program: String,
        args: String,
        stderr: String,
    },

    #[error("`{program} {args}` timed out after {timeout:?}")]
    CommandTimedOut {
        program: String,
        args: String,
        timeout: Duration,
    },

    #[error("Output of `{program}` is not valid UTF-8")]
    CommandOutputNotUtf8 { program: String },

    // Remote lookup errors
    #[error("No GitHub remote found")]
    RemoteNotFound,

    // Cache errors
    #[error("Could not find cache directory")]
    CacheDirectoryNotFound,

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using RepoStatusError
pub type Result<T> = std::result::Result<T, RepoStatusError>;

impl RepoStatusError {
    /// Create a command failed error from a program, its arguments and captured stderr
    pub fn command_failed(program: &str, args: &[&str], stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            program: program.to_string(),
            args: args.join(" "),
            stderr: stderr.into(),
        }
    }

    /// Create a command timeout error
    pub fn command_timed_out(program: &str, args: &[&str], timeout: Duration) -> Self {
        Self::CommandTimedOut {
            program: program.to_string(),
            args: args.join(" "),
            timeout,
        }
    }

    /// Create a base path error
    pub fn base_path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::BasePathNotFound { path: path.into() }
    }

    /// Create a config file not found error
    pub fn config_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigFileNotFound { path: path.into() }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error is a command timeout. Timeouts are never retried.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::CommandTimedOut { .. })
    }
}
