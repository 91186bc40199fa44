use std::io::{self, BufRead, Write};

/// Ask the user to confirm `commit_message`.
///
/// Accepts exactly `y` or `n` (case-insensitive, surrounding whitespace ignored) and
/// reprompts on anything else. End of input counts as `n`.
pub fn read_confirmation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    commit_message: &str,
) -> io::Result<bool> {
    write!(output, "\n\"{commit_message}\". Confirm? [y/n]: ")?;
    output.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                write!(output, "Wrong input. Try again [y/n]: ")?;
                output.flush()?;
            }
        }
    }
}
