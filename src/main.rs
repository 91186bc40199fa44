use clap::Parser;
use neuromancer::commands::*;
use neuromancer::core::{print_error_report, print_warning};
use neuromancer::WorkflowOutcome;

#[derive(Parser)]
#[command(name = "neuromancer")]
#[command(about = "Validate, stage, commit and push with a semantic commit message")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    /// Commit type (feat, fix, docs, style, refactor, test, chore) or "help"
    commit_type: Option<String>,

    /// Commit message; multiple words are joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    message: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if cli.commit_type.as_deref() == Some("help") {
        execute_help();
        return;
    }

    let args = CommitArgs {
        commit_type: cli.commit_type.unwrap_or_default(),
        message: cli.message,
        assume_yes: cli.yes,
    };

    match execute_commit(args) {
        Ok(WorkflowOutcome::Done { .. }) => {}
        Ok(WorkflowOutcome::Cancelled) => {
            print_warning("Operation cancelled.");
            std::process::exit(1);
        }
        Err(e) => {
            log::debug!("Workflow failed: {e:?}");
            print_error_report(&e);
            std::process::exit(1);
        }
    }
}
