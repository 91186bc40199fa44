//! Repository handle and the git operations the workflow needs.
//!
//! [`RepositoryHandle`] wraps the top level of a working tree that has been checked once
//! for git metadata and exposes the derived facts (branch, remote URL, pending changes) and the
//! four workflow operations. Every call goes through a [`GitRunner`]; non-zero exits
//! become [`GitFlowError::OperationFailed`] carrying the operation name and stderr.
//!
//! # Public API
//! - [`RepositoryHandle`]: Validated repository plus its runner
//! - [`PendingChanges`]: Modified and untracked files found by the preflight check
//! - [`ops`]: Operation names reported in `OperationFailed`

use crate::core::{
    error::{GitFlowError, Result},
    runner::{GitRunner, OperationOutcome, ProcessRunner},
};
use std::path::{Path, PathBuf};

/// Operation names used in error reports
pub mod ops {
    pub const SHOW_TOPLEVEL: &str = "show_toplevel";
    pub const GIT_DIR: &str = "git_dir";
    pub const GET_BRANCH: &str = "get_branch";
    pub const GET_REMOTE: &str = "get_remote";
    pub const LIST_MODIFIED: &str = "list_modified";
    pub const LIST_UNTRACKED: &str = "list_untracked";
    pub const FETCH_DRY_RUN: &str = "fetch_dry_run";
    pub const PUSH_DRY_RUN: &str = "push_dry_run";
    pub const STAGE: &str = "stage";
    pub const COMMIT: &str = "commit";
    pub const PUSH: &str = "push";
    pub const STATUS: &str = "status";
}

/// Files that would be picked up by `git add --all`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingChanges {
    pub modified: Vec<String>,
    pub untracked: Vec<String>,
}

impl PendingChanges {
    pub fn is_empty(&self) -> bool {
        self.modified.is_empty() && self.untracked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modified.len() + self.untracked.len()
    }
}

pub struct RepositoryHandle<R: GitRunner = ProcessRunner> {
    root: PathBuf,
    runner: R,
}

impl RepositoryHandle<ProcessRunner> {
    /// Open the repository containing `path`, failing if there is none.
    ///
    /// `path` may be any directory inside the working tree; the handle is rooted at
    /// the top level so the preflight listing and `add --all` cover the same files.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let start = path
            .canonicalize()
            .map_err(|_| GitFlowError::not_a_repository(path))?;
        let root = Self::toplevel(&start)?;
        let runner = ProcessRunner::new(&root);
        Self::with_runner(root, runner)
    }

    fn toplevel(start: &Path) -> Result<PathBuf> {
        let outcome = ProcessRunner::new(start)
            .run(&["rev-parse", "--show-toplevel"])
            .map_err(|e| GitFlowError::operation_failed(ops::SHOW_TOPLEVEL, e.to_string()))?;

        let toplevel = outcome.stdout.trim();
        if !outcome.success() || toplevel.is_empty() {
            return Err(GitFlowError::not_a_repository(start));
        }
        Ok(PathBuf::from(toplevel))
    }
}

impl<R: GitRunner> RepositoryHandle<R> {
    /// Build a handle on top of any runner. Validation runs once, here.
    pub fn with_runner(root: impl Into<PathBuf>, runner: R) -> Result<Self> {
        let handle = Self {
            root: root.into(),
            runner,
        };
        handle.validate()?;
        log::debug!("Opened repository at {}", handle.root.display());
        Ok(handle)
    }

    pub fn validate(&self) -> Result<()> {
        let outcome = self.execute(ops::GIT_DIR, &["rev-parse", "--git-dir"])?;
        if outcome.success() {
            Ok(())
        } else {
            Err(GitFlowError::not_a_repository(&self.root))
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Invoke git once, turning spawn failures into `OperationFailed`
    fn execute(&self, op: &str, args: &[&str]) -> Result<OperationOutcome> {
        self.runner
            .run(args)
            .map_err(|e| GitFlowError::operation_failed(op, e.to_string()))
    }

    /// Invoke git once and require a zero exit status
    fn execute_checked(&self, op: &str, args: &[&str]) -> Result<OperationOutcome> {
        let outcome = self.execute(op, args)?;
        if !outcome.success() {
            let details = if outcome.stderr.trim().is_empty() {
                &outcome.stdout
            } else {
                &outcome.stderr
            };
            return Err(GitFlowError::operation_failed(op, details.as_str()));
        }
        Ok(outcome)
    }

    pub fn current_branch(&self) -> Result<String> {
        let outcome =
            self.execute_checked(ops::GET_BRANCH, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        let branch = outcome.stdout.trim();
        if branch.is_empty() {
            return Err(GitFlowError::operation_failed(
                ops::GET_BRANCH,
                "git reported an empty branch name",
            ));
        }
        Ok(branch.to_string())
    }

    /// URL of `remote`, or `None` when the remote is not configured
    pub fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        let key = format!("remote.{remote}.url");
        let outcome = self.execute(ops::GET_REMOTE, &["config", "--get", &key])?;

        match outcome.exit_code {
            0 => {
                let url = outcome.stdout.trim();
                Ok((!url.is_empty()).then(|| url.to_string()))
            }
            // git config exits 1 when the key is missing
            1 if outcome.stderr.trim().is_empty() => Ok(None),
            _ => Err(GitFlowError::operation_failed(
                ops::GET_REMOTE,
                outcome.stderr,
            )),
        }
    }

    pub fn pending_changes(&self) -> Result<PendingChanges> {
        let modified = self.execute_checked(ops::LIST_MODIFIED, &["ls-files", "-m"])?;
        let untracked = self.execute_checked(
            ops::LIST_UNTRACKED,
            &["ls-files", "--others", "--exclude-standard"],
        )?;

        Ok(PendingChanges {
            modified: modified.stdout_lines(),
            untracked: untracked.stdout_lines(),
        })
    }

    /// `git fetch --dry-run`; the raw outcome is left to the caller to classify
    pub fn probe_fetch(&self, remote: &str) -> Result<OperationOutcome> {
        self.execute(ops::FETCH_DRY_RUN, &["fetch", "--dry-run", remote])
    }

    /// `git push --dry-run`; the raw outcome is left to the caller to classify
    pub fn probe_push(&self, remote: &str, branch: &str) -> Result<OperationOutcome> {
        self.execute(ops::PUSH_DRY_RUN, &["push", "--dry-run", remote, branch])
    }

    pub fn stage_all(&self) -> Result<()> {
        self.execute_checked(ops::STAGE, &["add", "--all"])?;
        Ok(())
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.execute_checked(ops::COMMIT, &["commit", "-m", message])?;
        Ok(())
    }

    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.execute_checked(ops::PUSH, &["push", remote, branch])?;
        Ok(())
    }

    /// Output of `git status`
    pub fn status(&self) -> Result<String> {
        let outcome = self.execute_checked(ops::STATUS, &["status"])?;
        Ok(outcome.stdout)
    }
}
