//! Shared test utilities for repo-status integration tests
//!
//! Builds throwaway workspaces of real git repositories so the probes run against
//! the actual `git` binary.

pub mod assertions;
pub mod fixtures;
pub mod repository;
