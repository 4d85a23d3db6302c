use crate::core::error::{RepoStatusError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "repo-status";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR))
}

pub fn get_cache_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|_| home_dir().map(|home| home.join(".cache")))?,
        "macos" => home_dir()?.join("Library/Caches"),
        _ => dirs::cache_dir().ok_or(RepoStatusError::CacheDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(RepoStatusError::CacheDirectoryNotFound)
}
