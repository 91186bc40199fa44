use crate::core::commit_type::{CommitType, COMMIT_MESSAGE_EXAMPLE, COMMIT_MESSAGE_REFERENCES};
use colored::*;

/// Reference material for writing semantic commit messages
pub fn help_text() -> String {
    let mut text = format!("\n{COMMIT_MESSAGE_EXAMPLE}\n\n");

    text.push_str(&format!("{}\n\n", "Commit types:".blue()));
    for commit_type in CommitType::ALL {
        text.push_str(&format!(
            "   {:<9} {}\n",
            commit_type.as_str().green(),
            format!("({})", commit_type.description()).bright_black()
        ));
    }

    text.push_str(&format!("\n{}\n\n", "References:".blue()));
    for reference in COMMIT_MESSAGE_REFERENCES {
        text.push_str(&format!("   {}\n", reference.white()));
    }

    text.push_str(&format!(
        "\n{}\n   neuromancer <commit_type> <message...>\n",
        "Usage:".blue()
    ));
    text
}

pub fn execute_help() {
    println!("{}", help_text());
}
