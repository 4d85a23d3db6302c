//! Type-safe repository status values.
//!
//! This module defines [`ProbeStatus`] and [`ChangeCount`], which replace the loose
//! "ok"/"missing" strings and nullable counters a status report tends to grow with proper
//! enumerations. Every report row carries both, so formatting never has to check for
//! absent values.
//!
//! # Public API
//! - [`ProbeStatus`]: Outcome of probing a single repository
//! - [`ChangeCount`]: Number of pending working-tree entries, or a missing marker

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Outcome of probing one repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    /// The repository exists and was inspected
    Ok,
    /// The path has no `.git` directory
    Missing,
    /// The probe timed out or crashed
    Error,
}

impl ProbeStatus {
    /// Whether the row holds real data rather than placeholders
    pub fn is_ok(self) -> bool {
        matches!(self, ProbeStatus::Ok)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProbeStatus::Ok => "ok",
            ProbeStatus::Missing => "missing",
            ProbeStatus::Error => "error",
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count of modified, staged and untracked entries in a working tree.
///
/// `Missing` is deliberately distinct from `Count(0)`: a clean tree and a tree we could
/// not read must never render the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeCount {
    Count(usize),
    Missing,
}

impl ChangeCount {
    pub fn is_clean(self) -> bool {
        matches!(self, ChangeCount::Count(0))
    }

    pub fn is_missing(self) -> bool {
        matches!(self, ChangeCount::Missing)
    }
}

impl fmt::Display for ChangeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeCount::Count(0) => f.write_str("clean"),
            ChangeCount::Count(n) => write!(f, "{n}"),
            ChangeCount::Missing => f.write_str("missing"),
        }
    }
}

// Serialized as a plain integer, or the string "missing", so JSON consumers never see null.
impl Serialize for ChangeCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ChangeCount::Count(n) => serializer.serialize_u64(*n as u64),
            ChangeCount::Missing => serializer.serialize_str("missing"),
        }
    }
}
