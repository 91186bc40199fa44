//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the standardized formatting functions used by every command,
//! including the rendering of classified failures.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, blue for headings
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Structured failures**: Message, then details, then suggestion

use crate::core::error::{GitFlowError, Severity};
use colored::*;

/// Formats and prints a warning with consistent styling
pub fn print_warning(message: &str) {
    println!("\n{} {}\n", "⚠ Warning:".yellow(), message.white());
}

/// Render a classified failure
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// Details:
///   <details>
///
/// Suggestion:
///   <suggestion>
///
/// ```
pub fn format_error_report(error: &GitFlowError) -> String {
    let headline = match error.severity() {
        Severity::Info => "ℹ".blue(),
        Severity::Warning => "⚠ Warning:".yellow(),
        Severity::Error => "✕ Error:".red(),
        Severity::Critical => "✕ Critical:".red().bold(),
    };

    let mut report = format!("\n{} {}\n", headline, error.message().white());

    if let Some(details) = error.details() {
        report.push_str(&format!("\n{}\n", "Details:".blue()));
        for line in details.lines() {
            report.push_str(&format!("  {}\n", line.bright_black()));
        }
    }

    if let Some(suggestion) = error.suggestion() {
        report.push_str(&format!("\n{}\n", "Suggestion:".blue()));
        report.push_str(&format!("  {}\n", suggestion.white()));
    }

    report
}

/// Prints a classified failure; see [`format_error_report`]
pub fn print_error_report(error: &GitFlowError) {
    println!("{}", format_error_report(error));
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}
