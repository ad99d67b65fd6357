//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use crate::error::{ChangelogError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_config, display_error, display_report,
    display_section_summary, display_status, display_success, display_tags,
};

/// Decide whether prompts may be shown.
///
/// Prompts are disabled by `--ci`, by a truthy `CI` environment variable,
/// or when no user is attending the terminal.
pub fn is_interactive(ci_flag: bool) -> bool {
    if ci_flag || env_flag_set("CI") {
        return false;
    }
    console::user_attended()
}

fn env_flag_set(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => {
            let value = value.trim().to_lowercase();
            !(value.is_empty() || value == "0" || value == "false" || value == "no")
        }
        Err(_) => false,
    }
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Displays the given prompt and accepts "y" or "yes" (case-insensitive) as confirmation.
/// Default is "no" if user presses Enter.
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, or "n"/"no")
/// * `Err` - If input error occurs
pub fn confirm_action(prompt: &str) -> Result<bool> {
    let response = read_answer(&format!("\n{} (y/N): ", prompt))?.to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Prompts for a value, returning `default` when the user presses Enter.
pub fn prompt_with_default(prompt: &str, default: &str) -> Result<String> {
    let answer = read_answer(&format!("{} [{}]: ", prompt, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Prompts for a value that must not be empty.
pub fn prompt_required(prompt: &str) -> Result<String> {
    let answer = read_answer(&format!("{}: ", prompt))?;
    if answer.is_empty() {
        Err(ChangelogError::prompt(format!("{} is required", prompt)))
    } else {
        Ok(answer)
    }
}

// Prompts go to stderr so a dry run's stdout holds only the changelog
fn read_answer(prompt: &str) -> Result<String> {
    eprint!("{}", prompt);
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_ci_flag_disables_prompts() {
        assert!(!is_interactive(true));
    }

    #[test]
    #[serial]
    fn test_ci_env_disables_prompts() {
        std::env::set_var("CI", "true");
        assert!(!is_interactive(false));
        std::env::remove_var("CI");
    }

    #[test]
    #[serial]
    fn test_env_flag_values() {
        std::env::set_var("GIT_CHANGELOG_TEST_FLAG", "0");
        assert!(!env_flag_set("GIT_CHANGELOG_TEST_FLAG"));
        std::env::set_var("GIT_CHANGELOG_TEST_FLAG", "1");
        assert!(env_flag_set("GIT_CHANGELOG_TEST_FLAG"));
        std::env::remove_var("GIT_CHANGELOG_TEST_FLAG");
        assert!(!env_flag_set("GIT_CHANGELOG_TEST_FLAG"));
    }
}
