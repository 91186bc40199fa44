//! Semantic commit conventions.
//!
//! [`CommitType`] is the closed set of prefixes a commit message may carry, and
//! [`CommitRequest`] pairs one with free text to produce the final message.

use crate::core::error::{GitFlowError, Result};
use std::fmt;
use std::str::FromStr;

/// Annotated example shown by `help`
pub const COMMIT_MESSAGE_EXAMPLE: &str = "\
feat: add hat wobble
^--^  ^------------^
|     |
|     +-> Summary in present tense.
|
+-------> Type: chore, docs, feat, fix, refactor, style, or test.";

pub const COMMIT_MESSAGE_REFERENCES: [&str; 3] = [
    "www.conventionalcommits.org/",
    "seesparkbox.com/foundry/semantic_commit_messages",
    "karma-runner.github.io/1.0/dev/git-commit-msg.html",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Chore,
}

impl CommitType {
    pub const ALL: [CommitType; 7] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Test,
        CommitType::Chore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "new feature for the user, not a new feature for build script",
            CommitType::Fix => "bug fix for the user, not a fix to a build script",
            CommitType::Docs => "changes to the documentation",
            CommitType::Style => "formatting, missing semi colons, etc; no production code change",
            CommitType::Refactor => "refactoring production code, eg. renaming a variable",
            CommitType::Test => {
                "adding missing tests, refactoring tests; no production code change"
            }
            CommitType::Chore => "updating grunt tasks etc; no production code change",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = GitFlowError;

    fn from_str(s: &str) -> Result<Self> {
        CommitType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GitFlowError::invalid_commit_type(s))
    }
}

/// A validated commit type plus the user's free text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    commit_type: CommitType,
    free_text: String,
}

impl CommitRequest {
    /// Validate raw input. The type is checked before the message.
    pub fn parse(commit_type: &str, words: &[String]) -> Result<Self> {
        let commit_type: CommitType = commit_type.parse()?;
        let free_text = words.join(" ");
        if free_text.is_empty() {
            return Err(GitFlowError::MissingCommitMessage);
        }

        Ok(Self {
            commit_type,
            free_text,
        })
    }

    pub fn commit_type(&self) -> CommitType {
        self.commit_type
    }

    /// The message handed to `git commit -m`
    pub fn message(&self) -> String {
        format!("{}: {}", self.commit_type, self.free_text)
    }
}
