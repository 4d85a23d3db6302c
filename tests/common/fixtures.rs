//! Predefined workspace scenarios
//!
//! Provides functions for creating workspaces with specific repository states to test
//! the probes and the rendered table consistently.

#![allow(dead_code)]

use super::repository::*;
use repo_status::core::error::Result;

/// Repository with one commit and a clean working tree
pub fn add_clean_repo(workspace: &TestWorkspace, name: &str) -> Result<()> {
    let path = workspace.repo_path(name);
    init_repo(&path)?;
    create_file(&path, "README.md", "# docs\n")?;
    commit_all(&path, "Initial commit")?;
    Ok(())
}

/// Repository with one commit plus `dirty_files` untracked files
pub fn add_dirty_repo(workspace: &TestWorkspace, name: &str, dirty_files: usize) -> Result<()> {
    add_clean_repo(workspace, name)?;
    let path = workspace.repo_path(name);
    for i in 0..dirty_files {
        create_file(&path, &format!("draft{i}.md"), "work in progress\n")?;
    }
    Ok(())
}

/// Repository whose only commit has the given committer timestamp
pub fn add_repo_committed_at(workspace: &TestWorkspace, name: &str, epoch: i64) -> Result<()> {
    let path = workspace.repo_path(name);
    init_repo(&path)?;
    create_file(&path, "README.md", &format!("# {name}\n"))?;
    commit_all_at(&path, "Initial commit", epoch)?;
    Ok(())
}

/// Base directory that is itself a repository, with `docs` and `templates` inside it
/// and a `missing` name that has no directory at all
pub fn create_ecosystem_workspace() -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;
    init_repo(workspace.path())?;
    create_file(workspace.path(), ".gitignore", "docs/\ntemplates/\n")?;
    commit_all(workspace.path(), "Root commit")?;

    add_clean_repo(&workspace, "docs")?;
    add_dirty_repo(&workspace, "templates", 2)?;
    Ok(workspace)
}

/// Stand-in for `gh` that answers the open issue and PR listings for `acme/widgets`:
/// five issues (two bugs, one feature, one urgent) and three PRs (one draft, one awaiting review)
#[cfg(unix)]
pub fn write_fake_gh(dir: &std::path::Path) -> Result<std::path::PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-gh");
    let body = r#"#!/bin/sh
case "$*" in
  "issue list --repo acme/widgets --state open --json number,labels --limit 200")
    echo '[{"number":1,"labels":[{"name":"bug"}]},{"number":2,"labels":[{"name":"enhancement"}]},{"number":3,"labels":[{"name":"critical"}]},{"number":4,"labels":[]},{"number":5,"labels":[{"name":"question"}]}]'
    ;;
  "pr list --repo acme/widgets --state open --json number,isDraft,reviewDecision --limit 200")
    echo '[{"number":7,"isDraft":true,"reviewDecision":""},{"number":8,"isDraft":false,"reviewDecision":"REVIEW_REQUIRED"},{"number":9,"isDraft":false,"reviewDecision":"APPROVED"}]'
    ;;
  *)
    echo "unexpected arguments: $*" >&2
    exit 1
    ;;
esac
"#;
    std::fs::write(&script, body)?;
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;
    Ok(script)
}
