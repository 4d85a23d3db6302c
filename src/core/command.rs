//! Bounded execution of external commands.
//!
//! Every git and gh invocation goes through [`run_command`]. Children are spawned with
//! `kill_on_drop`, so when an enclosing timeout drops the future the process is killed
//! instead of lingering.

use crate::core::error::{RepoStatusError, Result};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Run `program args...` in `dir` and return its trimmed stdout.
///
/// Fails on spawn errors, non-zero exit, non-UTF-8 output, or when `timeout` elapses.
pub async fn run_command(
    program: &str,
    args: &[&str],
    dir: Option<&Path>,
    timeout: Duration,
) -> Result<String> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    log::debug!("running `{} {}` in {:?}", program, args.join(" "), dir);

    let output = match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(output) => output?,
        Err(_) => return Err(RepoStatusError::command_timed_out(program, args, timeout)),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RepoStatusError::command_failed(program, args, stderr.trim()));
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| {
        RepoStatusError::CommandOutputNotUtf8 {
            program: program.to_string(),
        }
    })?;

    Ok(stdout.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_io_error() {
        let result = run_command(
            "definitely-not-a-real-program-xyz",
            &[],
            None,
            Duration::from_secs(5),
        )
        .await;
        assert!(matches!(result, Err(RepoStatusError::Io(_))));
    }

    #[tokio::test]
    async fn test_git_version_succeeds() -> Result<()> {
        let out = run_command("git", &["--version"], None, Duration::from_secs(10)).await?;
        assert!(out.starts_with("git version"));
        Ok(())
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_command_failed() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = run_command(
            "git",
            &["rev-parse", "--definitely-invalid-flag-xyz"],
            Some(dir.path()),
            Duration::from_secs(10),
        )
        .await;
        assert!(matches!(result, Err(RepoStatusError::CommandFailed { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_slow_command_times_out() {
        let result = run_command("sleep", &["5"], None, Duration::from_millis(100)).await;
        assert!(result.as_ref().is_err_and(|e| e.is_timeout()));
    }
}
