//! Common assertion helpers for test output validation
//!
//! Provides predicates for the error reports and progress lines neuromancer prints.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the not-a-repository report
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("not a Git repository")
}

/// Creates a predicate that checks for an invalid commit type report
pub fn invalid_commit_type(commit_type: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Invalid commit type: '{commit_type}'"))
}

/// Creates a predicate that checks the list of valid types is offered
pub fn lists_valid_types() -> impl Predicate<str> {
    predicates::str::contains("'feat'").and(predicates::str::contains("'chore'"))
}

/// Creates a predicate that checks for the offline report
pub fn no_internet() -> impl Predicate<str> {
    predicates::str::contains("No internet connection")
}

/// Creates a predicate that checks a suggestion line is present
pub fn has_suggestion() -> impl Predicate<str> {
    predicates::str::contains("Suggestion:")
}
