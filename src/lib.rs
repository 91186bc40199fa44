//! Neuromancer - a guided semantic commit workflow.
//!
//! The library checks that a working directory is ready for a commit (network, remote
//! access, pending changes), validates a typed commit message, and then runs
//! stage → commit → push → status through the `git` executable, reporting every failure
//! as a classified [`GitFlowError`].
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The repository handle and git runner abstraction
//! - The environment validator and its connectivity probe
//! - The commit workflow state machine
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    AutoConfirm,
    Check,
    CommitRequest,
    CommitType,
    CommitWorkflow,
    ConnectivityProbe,
    EnvironmentValidator,
    // Error handling
    GitFlowError,
    // Git access
    GitRunner,
    HttpProbe,
    Interaction,
    OperationOutcome,
    PendingChanges,
    ProcessRunner,
    RepositoryHandle,
    Result,
    Settings,
    Severity,
    Step,
    WorkflowOutcome,
    WorkflowState,
};
