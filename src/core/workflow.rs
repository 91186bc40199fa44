//! The commit workflow state machine.
//!
//! ```text
//! Idle -> ArgsValidated -> EnvironmentValidated -> Staged -> Committed -> Pushed -> Done
//!                                      |
//!                                      +-> Cancelled (user declined)
//! any state -> Failed(GitFlowError)
//! ```
//!
//! Argument validation happens in [`CommitWorkflow::new`] and touches nothing outside the
//! process. [`CommitWorkflow::execute`] runs the preflight checks, asks for
//! confirmation, then invokes exactly one git operation per step. A failed step ends the
//! run; earlier steps are not rolled back. The final status read is best-effort.

use crate::core::{
    commit_type::CommitRequest,
    config::Settings,
    environment::{ConnectivityProbe, EnvironmentValidator},
    error::{GitFlowError, Result},
    git::ops,
    runner::GitRunner,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    ArgsValidated,
    EnvironmentValidated,
    Staged,
    Committed,
    Pushed,
    Done,
    Cancelled,
    Failed(GitFlowError),
}

/// One git operation in the fixed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Stage,
    Commit,
    Push,
    Status,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Stage => ops::STAGE,
            Step::Commit => ops::COMMIT,
            Step::Push => ops::PUSH,
            Step::Status => ops::STATUS,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The user-facing side of a run: confirmation and progress
pub trait Interaction {
    /// Return `false` to cancel before anything is staged
    fn confirm(&mut self, commit_message: &str) -> bool;

    /// `detail` is the commit message for [`Step::Commit`] and `remote/branch` for
    /// [`Step::Push`], empty otherwise
    fn step_started(&mut self, _step: Step, _detail: &str) {}

    fn step_completed(&mut self, _step: Step) {}
}

/// Confirms everything and reports nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Interaction for AutoConfirm {
    fn confirm(&mut self, _commit_message: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// `status` is `None` when the final read failed
    Done { status: Option<String> },
    Cancelled,
}

pub struct CommitWorkflow<'s> {
    request: CommitRequest,
    settings: &'s Settings,
    state: WorkflowState,
}

impl<'s> CommitWorkflow<'s> {
    /// Validate the commit type and message words. No external operation is performed.
    pub fn new(commit_type: &str, words: &[String], settings: &'s Settings) -> Result<Self> {
        let request = CommitRequest::parse(commit_type, words)?;
        Ok(Self::from_request(request, settings))
    }

    pub fn from_request(request: CommitRequest, settings: &'s Settings) -> Self {
        let mut workflow = Self {
            request,
            settings,
            state: WorkflowState::Idle,
        };
        workflow.transition(WorkflowState::ArgsValidated);
        workflow
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn commit_message(&self) -> String {
        self.request.message()
    }

    /// Drive the workflow from `ArgsValidated` to a terminal state
    pub fn execute<R: GitRunner, P: ConnectivityProbe>(
        &mut self,
        validator: &EnvironmentValidator<'_, R, P>,
        interaction: &mut dyn Interaction,
    ) -> Result<WorkflowOutcome> {
        debug_assert_eq!(self.state, WorkflowState::ArgsValidated);

        let result = self.drive(validator, interaction);
        if let Err(e) = &result {
            self.transition(WorkflowState::Failed(e.clone()));
        }
        result
    }

    fn drive<R: GitRunner, P: ConnectivityProbe>(
        &mut self,
        validator: &EnvironmentValidator<'_, R, P>,
        interaction: &mut dyn Interaction,
    ) -> Result<WorkflowOutcome> {
        validator.validate()?;
        self.transition(WorkflowState::EnvironmentValidated);

        let message = self.commit_message();
        if !interaction.confirm(&message) {
            self.transition(WorkflowState::Cancelled);
            return Ok(WorkflowOutcome::Cancelled);
        }

        let repo = validator.repository();
        let settings = self.settings;
        let remote = &settings.remote_name;

        interaction.step_started(Step::Stage, "");
        repo.stage_all()?;
        interaction.step_completed(Step::Stage);
        self.transition(WorkflowState::Staged);
        self.pause();

        interaction.step_started(Step::Commit, &message);
        repo.commit(&message)?;
        interaction.step_completed(Step::Commit);
        self.transition(WorkflowState::Committed);
        self.pause();

        let branch = repo.current_branch()?;
        interaction.step_started(Step::Push, &format!("{remote}/{branch}"));
        repo.push(remote, &branch)?;
        interaction.step_completed(Step::Push);
        self.transition(WorkflowState::Pushed);

        self.transition(WorkflowState::Done);
        self.pause();

        interaction.step_started(Step::Status, "");
        let status = match repo.status() {
            Ok(status) => {
                interaction.step_completed(Step::Status);
                Some(status)
            }
            Err(e) => {
                log::warn!("Could not read final status: {e}");
                None
            }
        };

        Ok(WorkflowOutcome::Done { status })
    }

    fn transition(&mut self, next: WorkflowState) {
        log::debug!("Workflow {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn pause(&self) {
        let delay = self.settings.operation_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
