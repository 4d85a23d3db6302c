use crate::core::dirs::get_config_directory;
use crate::core::error::{RepoStatusError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Optional workspace settings, read from `config.json`
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub repositories: Vec<String>,
    pub base_dir: Option<PathBuf>,
    pub max_concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub cache_ttl_secs: Option<u64>,
}

impl WorkspaceConfig {
    /// Load an explicitly named config file; it must exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RepoStatusError::config_file_not_found(path));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| RepoStatusError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| RepoStatusError::config_parse_failed(path, e))
    }

    /// Load `path` if given, else the default location. A missing default file yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = get_config_directory()?.join(CONFIG_FILE_NAME);
        if default_path.exists() {
            log::debug!("Using config file {}", default_path.display());
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}
