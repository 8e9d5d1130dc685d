//! Interactive user prompting
//!
//! Keeps CLI prompting logic out of the command bodies so they stay
//! testable with a fake service.

use std::io::{self, Write};

use crate::error::Result;

/// Prompt user for yes/no confirmation
///
/// # Arguments
/// * `prompt` - The prompt message to display (without [y/N] suffix)
///
/// # Returns
/// * `true` if user confirms with 'y' or 'Y'
/// * `false` otherwise
///
/// # Example
/// ```no_run
/// # use cardctl::commands::interactive::confirm;
/// let confirmed = confirm("Delete this card").unwrap();
/// if confirmed {
///     // proceed with deletion
/// }
/// ```
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{}? [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
