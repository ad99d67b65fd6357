//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! Functions here have no side effects beyond printing.

use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::changelog::ChangelogDocument;
use crate::domain::TaggedCommit;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Print report lines on stdout, or on stderr when stdout carries output.
pub fn display_report(lines: &[String], to_stderr: bool) {
    for line in lines {
        if to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// The effective configuration, one line per setting.
///
/// # Arguments
/// * `branch` - Development branch
/// * `version` - Release version
/// * `changelog_path` - Output file
/// * `template_path` - Custom template, if any
pub fn format_config(
    branch: &str,
    version: &str,
    changelog_path: &Path,
    template_path: Option<&Path>,
) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "\x1b[1mYour config:\x1b[0m".to_string(),
        format!("  * Development branch: {}", branch),
        format!("  * Release version: {}", version),
        format!("  * Changelog path: {}", changelog_path.display()),
    ];
    if let Some(template) = template_path {
        lines.push(format!(
            "  * Changelog template path: {}",
            template.display()
        ));
    }
    lines
}

/// Display the effective configuration before generating.
pub fn display_config(
    branch: &str,
    version: &str,
    changelog_path: &Path,
    template_path: Option<&Path>,
    to_stderr: bool,
) {
    display_report(
        &format_config(branch, version, changelog_path, template_path),
        to_stderr,
    );
}

/// Display the tags that bound changelog sections, oldest first.
pub fn display_tags(tagged_commits: &[TaggedCommit]) {
    if tagged_commits.is_empty() {
        println!("No release tags found");
        return;
    }

    println!("\x1b[1mRelease tags:\x1b[0m");
    for tagged in tagged_commits {
        println!(
            "  - {} ({} {})",
            tagged.tag,
            tagged.commit.short_hash(),
            tagged.timestamp().format("%Y-%m-%d")
        );
    }
}

/// One line per section, e.g. `v1.0.0 → v1.1.0: 4 changes`.
pub fn format_section_summary(document: &ChangelogDocument) -> Vec<String> {
    document
        .sections
        .iter()
        .map(|section| {
            let from = if section.header_from.is_empty() {
                "(start)"
            } else {
                section.header_from.as_str()
            };
            let noun = if section.changes.len() == 1 {
                "change"
            } else {
                "changes"
            };
            format!(
                "{} → {}: {} {}",
                from,
                section.header_to,
                section.changes.len(),
                noun
            )
        })
        .collect()
}

/// Display the section summary of a built changelog.
pub fn display_section_summary(document: &ChangelogDocument, to_stderr: bool) {
    let mut lines = vec![String::new(), "\x1b[1mChangelog sections:\x1b[0m".to_string()];
    lines.extend(
        format_section_summary(document)
            .into_iter()
            .map(|line| format!("  {}", line)),
    );
    display_report(&lines, to_stderr);
}
