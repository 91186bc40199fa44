//! Classified failures for the commit workflow.
//!
//! This module defines [`GitFlowError`], the closed set of failures the pipeline can
//! produce. Each variant is one error kind carrying its structured fields; the
//! presentation layer reads the message, details, suggestion and severity from it.
//!
//! # Public API
//! - [`GitFlowError`]: Every failure mode of the workflow
//! - [`Severity`]: Presentation hint attached to each failure
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitFlowError>`
//!
//! # Error Categories
//! - **Repository**: Not a git working directory
//! - **Environment**: Connectivity, remote configuration, authorization, pending changes
//! - **Arguments**: Commit type and message validation
//! - **Operations**: A git invocation exited non-zero or could not be spawned

use crate::core::commit_type::CommitType;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// How loudly a failure should be presented.
///
/// Severity does not drive control flow: every failure ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
    /// Reserved for unrecoverable internal conditions
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Domain-specific error types for neuromancer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitFlowError {
    #[error("The directory '{}' is not a Git repository", path.display())]
    NotARepository { path: PathBuf },

    #[error("No internet connection")]
    NoInternetConnection { details: Option<String> },

    #[error("Remote repository '{remote}' not configured")]
    NoRemoteConfigured { remote: String },

    #[error("No permission to access repository")]
    AuthorizationDenied { details: String },

    #[error("Repository not found")]
    RepositoryNotFound { details: String },

    #[error("No changes to commit")]
    NoChangesToCommit,

    #[error("{}", invalid_commit_type_message(commit_type))]
    InvalidCommitType { commit_type: String },

    #[error("Commit message not provided")]
    MissingCommitMessage,

    #[error("Error executing operation '{op}'")]
    OperationFailed { op: String, details: Option<String> },
}

fn invalid_commit_type_message(commit_type: &str) -> String {
    if commit_type.is_empty() {
        "Commit type not provided".to_string()
    } else {
        format!("Invalid commit type: '{commit_type}'")
    }
}

/// Convenience type alias for Results using GitFlowError
pub type Result<T> = std::result::Result<T, GitFlowError>;

impl GitFlowError {
    /// Create a not-a-repository error for a path
    pub fn not_a_repository(path: impl Into<PathBuf>) -> Self {
        Self::NotARepository { path: path.into() }
    }

    /// Create a connectivity error carrying the transport failure text
    pub fn no_internet_connection(details: impl Into<String>) -> Self {
        Self::NoInternetConnection {
            details: Some(details.into()),
        }
    }

    /// Create a missing remote error
    pub fn no_remote_configured(remote: impl Into<String>) -> Self {
        Self::NoRemoteConfigured {
            remote: remote.into(),
        }
    }

    /// Create an invalid commit type error
    pub fn invalid_commit_type(commit_type: impl Into<String>) -> Self {
        Self::InvalidCommitType {
            commit_type: commit_type.into(),
        }
    }

    /// Create an operation failure; empty details are dropped
    pub fn operation_failed(op: impl Into<String>, details: impl Into<String>) -> Self {
        let details = details.into();
        let details = details.trim();
        Self::OperationFailed {
            op: op.into(),
            details: (!details.is_empty()).then(|| details.to_string()),
        }
    }

    /// The headline shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Raw underlying error text, when there is any
    pub fn details(&self) -> Option<String> {
        match self {
            Self::NotARepository { .. } | Self::NoChangesToCommit => None,
            Self::NoInternetConnection { details } => details.clone(),
            Self::NoRemoteConfigured { remote } => Some(format!(
                "Use 'git remote add {remote} <url>' to configure the remote repository."
            )),
            Self::AuthorizationDenied { details } | Self::RepositoryNotFound { details } => {
                (!details.is_empty()).then(|| details.clone())
            }
            Self::InvalidCommitType { .. } => Some(format!(
                "Valid types: {}",
                CommitType::ALL
                    .iter()
                    .map(|t| format!("'{t}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
            Self::MissingCommitMessage => {
                Some("Usage: neuromancer <commit_type> <message>".to_string())
            }
            Self::OperationFailed { details, .. } => details.clone(),
        }
    }

    /// How to get past the failure
    pub fn suggestion(&self) -> Option<String> {
        let suggestion = match self {
            Self::NotARepository { .. } => "Run 'git init' to initialize a Git repository.",
            Self::NoInternetConnection { .. } => "Check your internet connection and try again.",
            Self::NoRemoteConfigured { .. } => {
                "Configure the remote repository, then run neuromancer again."
            }
            Self::AuthorizationDenied { .. } => "Check your credentials and access permissions.",
            Self::RepositoryNotFound { .. } => "Check if the repository URL is correct.",
            Self::NoChangesToCommit => "Make some changes to the files before trying to commit.",
            Self::InvalidCommitType { .. } => "Use 'neuromancer help' to see valid types.",
            Self::MissingCommitMessage => "Provide a descriptive message for the commit.",
            Self::OperationFailed { .. } => "Check repository status with 'git status'.",
        };
        Some(suggestion.to_string())
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::NoChangesToCommit => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// The failing operation name, for `OperationFailed`
    pub fn op(&self) -> Option<&str> {
        match self {
            Self::OperationFailed { op, .. } => Some(op),
            _ => None,
        }
    }
}
