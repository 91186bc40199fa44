//! The single point of contact with the `git` executable.
//!
//! [`GitRunner`] takes an argument vector and returns an [`OperationOutcome`]. The
//! production implementation, [`ProcessRunner`], spawns `git` in the repository root
//! and blocks until it exits. Nothing here retries or interprets the result; callers
//! classify every outcome.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Exit status and captured output of one git invocation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationOutcome {
    /// `-1` when the process was terminated by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl OperationOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Non-empty stdout lines
    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Runs git with an argument vector (never a shell string)
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> io::Result<OperationOutcome>;
}

impl<R: GitRunner + ?Sized> GitRunner for &R {
    fn run(&self, args: &[&str]) -> io::Result<OperationOutcome> {
        (**self).run(args)
    }
}

/// Spawns the `git` binary with the working directory fixed to `workdir`
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    workdir: PathBuf,
}

impl ProcessRunner {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self::with_program("git", workdir)
    }

    pub fn with_program<P: AsRef<Path>>(program: impl Into<String>, workdir: P) -> Self {
        Self {
            program: program.into(),
            workdir: workdir.as_ref().to_path_buf(),
        }
    }
}

impl GitRunner for ProcessRunner {
    fn run(&self, args: &[&str]) -> io::Result<OperationOutcome> {
        log::debug!("Running {} {}", self.program, args.join(" "));

        // Credential prompts would block forever behind captured stdio
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()?;

        let outcome = OperationOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        log::debug!(
            "git {} exited with {}",
            args.first().copied().unwrap_or_default(),
            outcome.exit_code
        );

        Ok(outcome)
    }
}
