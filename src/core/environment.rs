//! Preflight checks run before any mutating git operation.
//!
//! [`EnvironmentValidator`] runs the checks in [`Check::ORDER`] and stops at the first
//! failure: connectivity, then remote authorization, then pending changes. Later checks
//! assume earlier ones passed, so a missing network is never reported as "nothing to
//! commit".
//!
//! Remote probe failures are classified by [`classify_remote_failure`], the only place
//! that pattern-matches git's stderr.

use crate::core::{
    config::Settings,
    error::{GitFlowError, Result},
    git::{ops, PendingChanges, RepositoryHandle},
    runner::{GitRunner, OperationOutcome, ProcessRunner},
};
use std::fmt;
use std::time::Duration;

const NOT_FOUND_PATTERNS: &[&str] = &[
    "repository not found",
    "does not appear to be a git repository",
    "' not found",
    "repository does not exist",
    "could not be found",
    "error: 404",
];

const PERMISSION_PATTERNS: &[&str] = &[
    "permission denied",
    "authentication failed",
    "could not read username",
    "could not read password",
    "terminal prompts disabled",
    "invalid username or password",
    "access denied",
    "not authorized",
    "error: 403",
];

/// Reachability test for the network
pub trait ConnectivityProbe {
    /// `Err` carries the transport failure text
    fn probe(&self, url: &str, timeout: Duration) -> std::result::Result<(), String>;
}

/// HEAD request through a blocking HTTP client. Any HTTP response counts as online.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpProbe;

impl ConnectivityProbe for HttpProbe {
    fn probe(&self, url: &str, timeout: Duration) -> std::result::Result<(), String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("neuromancer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| e.to_string())?;

        client.head(url).send().map(|_| ()).map_err(|e| e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Connectivity,
    Authorization,
    PendingChanges,
}

impl Check {
    pub const ORDER: [Check; 3] = [
        Check::Connectivity,
        Check::Authorization,
        Check::PendingChanges,
    ];
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Check::Connectivity => "connectivity",
            Check::Authorization => "authorization",
            Check::PendingChanges => "pending changes",
        };
        f.write_str(name)
    }
}

pub struct EnvironmentValidator<'a, R: GitRunner = ProcessRunner, P: ConnectivityProbe = HttpProbe>
{
    repo: &'a RepositoryHandle<R>,
    settings: &'a Settings,
    probe: P,
}

impl<'a, R: GitRunner> EnvironmentValidator<'a, R, HttpProbe> {
    pub fn new(repo: &'a RepositoryHandle<R>, settings: &'a Settings) -> Self {
        Self::with_probe(repo, settings, HttpProbe)
    }
}

impl<'a, R: GitRunner, P: ConnectivityProbe> EnvironmentValidator<'a, R, P> {
    pub fn with_probe(repo: &'a RepositoryHandle<R>, settings: &'a Settings, probe: P) -> Self {
        Self {
            repo,
            settings,
            probe,
        }
    }

    pub fn repository(&self) -> &'a RepositoryHandle<R> {
        self.repo
    }

    /// Run every check in order, returning the first failure
    pub fn validate(&self) -> Result<()> {
        for check in Check::ORDER {
            log::debug!("Running {check} check");
            self.run_check(check).inspect_err(|e| {
                log::debug!("{check} check failed: {e}");
            })?;
        }
        Ok(())
    }

    pub fn run_check(&self, check: Check) -> Result<()> {
        match check {
            Check::Connectivity => self.check_connectivity(),
            Check::Authorization => self.check_authorization(),
            Check::PendingChanges => self.check_pending_changes().map(|_| ()),
        }
    }

    pub fn check_connectivity(&self) -> Result<()> {
        self.probe
            .probe(
                &self.settings.connectivity_url,
                self.settings.connectivity_timeout(),
            )
            .map_err(GitFlowError::no_internet_connection)
    }

    pub fn check_authorization(&self) -> Result<()> {
        let remote = &self.settings.remote_name;
        let url = self
            .repo
            .remote_url(remote)?
            .ok_or_else(|| GitFlowError::no_remote_configured(remote))?;
        log::debug!("Probing remote {remote} at {url}");

        let fetch = self.repo.probe_fetch(remote)?;
        if !fetch.success() {
            return Err(classify_remote_failure(ops::FETCH_DRY_RUN, &fetch));
        }

        // An unborn branch has no name to resolve and nothing to push yet
        let branch = match self.repo.current_branch() {
            Ok(branch) => branch,
            Err(e) => {
                log::debug!("Skipping push probe: {e}");
                return Ok(());
            }
        };

        let push = self.repo.probe_push(remote, &branch)?;
        if !push.success() {
            return Err(classify_remote_failure(ops::PUSH_DRY_RUN, &push));
        }
        Ok(())
    }

    pub fn check_pending_changes(&self) -> Result<PendingChanges> {
        let changes = self.repo.pending_changes()?;
        if changes.is_empty() {
            return Err(GitFlowError::NoChangesToCommit);
        }
        log::debug!(
            "Found {} modified and {} untracked file(s)",
            changes.modified.len(),
            changes.untracked.len()
        );
        Ok(changes)
    }
}

/// Map a failed remote probe to an error kind by inspecting git's stderr.
///
/// Not-found patterns are checked first: hosts often append an access-rights hint to
/// a missing-repository message.
pub fn classify_remote_failure(op: &str, outcome: &OperationOutcome) -> GitFlowError {
    let stderr = outcome.stderr.trim();
    let haystack = stderr.to_lowercase();
    let details = stderr.to_string();

    if NOT_FOUND_PATTERNS.iter().any(|p| haystack.contains(p)) {
        GitFlowError::RepositoryNotFound { details }
    } else if PERMISSION_PATTERNS.iter().any(|p| haystack.contains(p)) {
        GitFlowError::AuthorizationDenied { details }
    } else {
        GitFlowError::operation_failed(op, details)
    }
}
