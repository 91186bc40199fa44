//! Core functionality for the neuromancer tool.
//!
//! This module provides the validation-and-execution pipeline: the git runner, the
//! repository handle, the preflight checks, the commit workflow and its error taxonomy.

pub mod commit_type;
pub mod config;
pub mod dirs;
pub mod environment;
pub mod error;
pub mod git;
pub mod output;
pub mod prompt;
pub mod runner;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

// === Error handling ===
// Closed error taxonomy and result type used throughout the application
pub use error::{GitFlowError, Result, Severity};

// === Commit conventions ===
pub use commit_type::{CommitRequest, CommitType};

// === Configuration ===
// Immutable settings passed into the validator and workflow
pub use config::Settings;

// === Git access ===
// Runner abstraction and the validated repository handle built on it
pub use git::{PendingChanges, RepositoryHandle};
pub use runner::{GitRunner, OperationOutcome, ProcessRunner};

// === Pipeline ===
pub use environment::{Check, ConnectivityProbe, EnvironmentValidator, HttpProbe};
pub use workflow::{AutoConfirm, CommitWorkflow, Interaction, Step, WorkflowOutcome, WorkflowState};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{format_error_report, print_error_report, print_info, print_success, print_warning};
