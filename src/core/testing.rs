//! Scripted collaborators for unit tests.

use crate::core::environment::ConnectivityProbe;
use crate::core::runner::{GitRunner, OperationOutcome};
use std::cell::{Cell, RefCell};
use std::io;
use std::time::Duration;

pub fn ok(stdout: &str) -> OperationOutcome {
    OperationOutcome {
        exit_code: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn fail(exit_code: i32, stderr: &str) -> OperationOutcome {
    OperationOutcome {
        exit_code,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Answers git invocations from a table of argument prefixes and records every call.
/// Unmatched invocations succeed with empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    rules: Vec<(String, OperationOutcome)>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository on `main` with an `origin` remote and one modified file
    pub fn healthy() -> Self {
        Self::new()
            .respond(
                "config --get remote.origin.url",
                ok("git@example.com:team/app.git\n"),
            )
            .respond("rev-parse --abbrev-ref HEAD", ok("main\n"))
            .respond("ls-files -m", ok("src/lib.rs\n"))
    }

    /// The longest matching prefix wins
    pub fn respond(mut self, prefix: &str, outcome: OperationOutcome) -> Self {
        self.rules.push((prefix.to_string(), outcome));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|call| call.starts_with(prefix))
    }
}

impl GitRunner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> io::Result<OperationOutcome> {
        let call = args.join(" ");
        self.calls.borrow_mut().push(call.clone());

        let outcome = self
            .rules
            .iter()
            .filter(|(prefix, _)| call.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or_default();
        Ok(outcome)
    }
}

/// Connectivity probe with a fixed answer that counts how often it was asked
pub struct StaticProbe {
    online: bool,
    pub calls: Cell<usize>,
}

impl StaticProbe {
    pub fn online() -> Self {
        Self {
            online: true,
            calls: Cell::new(0),
        }
    }

    pub fn offline() -> Self {
        Self {
            online: false,
            calls: Cell::new(0),
        }
    }
}

impl ConnectivityProbe for &StaticProbe {
    fn probe(&self, _url: &str, _timeout: Duration) -> std::result::Result<(), String> {
        self.calls.set(self.calls.get() + 1);
        if self.online {
            Ok(())
        } else {
            Err("dns error: failed to lookup address".to_string())
        }
    }
}
