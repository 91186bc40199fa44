//! Predefined repository scenarios
//!
//! Each scenario returns the working repository and, where relevant, the bare remote it
//! pushes to. Both must be kept alive for the duration of the test.

#![allow(dead_code)]

use super::repository::*;
use anyhow::Result;

/// Scenario: fresh repository on an unborn branch with one untracked file and an empty
/// bare remote configured as `origin`
pub fn unborn_repo_with_remote() -> Result<(TestRepo, TestRepo)> {
    let repo = setup_test_repo()?;
    let remote = setup_bare_remote()?;
    add_remote(&repo.path, "origin", &remote.path.to_string_lossy())?;
    create_file(&repo.path, "login.html", "<form></form>\n")?;
    Ok((repo, remote))
}

/// Scenario: repository whose initial commit is already on the remote, with one
/// modified and one untracked file
pub fn published_repo_with_changes() -> Result<(TestRepo, TestRepo)> {
    let repo = setup_test_repo_with_initial_commit()?;
    let remote = setup_bare_remote()?;
    add_remote(&repo.path, "origin", &remote.path.to_string_lossy())?;
    git(&repo.path, &["push", "origin", "main"])?;

    create_file(&repo.path, "initial.txt", "changed content\n")?;
    create_file(&repo.path, "notes.md", "# Notes\n")?;
    Ok((repo, remote))
}

/// Scenario: clean repository in sync with its remote
pub fn clean_repo_with_remote() -> Result<(TestRepo, TestRepo)> {
    let repo = setup_test_repo_with_initial_commit()?;
    let remote = setup_bare_remote()?;
    add_remote(&repo.path, "origin", &remote.path.to_string_lossy())?;
    git(&repo.path, &["push", "origin", "main"])?;
    Ok((repo, remote))
}
