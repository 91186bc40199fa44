use crate::core::{
    config::Settings,
    environment::EnvironmentValidator,
    error::{GitFlowError, Result},
    git::RepositoryHandle,
    print_info, print_success,
    prompt::read_confirmation,
    workflow::{CommitWorkflow, Interaction, Step, WorkflowOutcome},
};
use colored::*;
use std::env;
use std::io::{self, IsTerminal};

pub struct CommitArgs {
    pub commit_type: String,
    pub message: Vec<String>,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
}

/// Terminal side of the workflow: stdin confirmation and step progress
pub struct ConsoleInteraction {
    assume_yes: bool,
}

impl ConsoleInteraction {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Interaction for ConsoleInteraction {
    fn confirm(&mut self, commit_message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        read_confirmation(&mut input, &mut output, commit_message).unwrap_or_else(|e| {
            log::warn!("Could not read confirmation: {e}");
            false
        })
    }

    fn step_started(&mut self, step: Step, detail: &str) {
        match step {
            Step::Stage => print_info("📁 Adding files..."),
            Step::Commit => print_info(&format!("💾 Creating commit: {}", detail.blue())),
            Step::Push => print_info(&format!("🚀 Pushing to: {}", detail.blue())),
            Step::Status => {}
        }
    }

    fn step_completed(&mut self, step: Step) {
        match step {
            Step::Stage => print_success("git add completed!"),
            Step::Commit => print_success("git commit completed!"),
            Step::Push => print_success("git push completed!"),
            Step::Status => {}
        }
    }
}

pub fn execute_commit(args: CommitArgs) -> Result<WorkflowOutcome> {
    let settings = Settings::load();

    // Arguments first: a bad type or message never reaches git
    let mut workflow = CommitWorkflow::new(&args.commit_type, &args.message, &settings)?;

    let current_dir = env::current_dir()
        .map_err(|e| GitFlowError::operation_failed("current_dir", e.to_string()))?;
    let repo = RepositoryHandle::open(&current_dir)?;
    let validator = EnvironmentValidator::new(&repo, &settings);

    let assume_yes = args.assume_yes || !io::stdin().is_terminal();
    let mut console = ConsoleInteraction::new(assume_yes);

    let outcome = workflow.execute(&validator, &mut console)?;

    if let WorkflowOutcome::Done { status } = &outcome {
        if let Some(status) = status {
            println!("\n{}", status.trim_end());
        }
        print_success(&format!(
            "Committed and pushed {}",
            workflow.commit_message().blue()
        ));
        println!();
    }

    Ok(outcome)
}
