//! Main workflow orchestration logic
//!
//! Resolves the effective settings, collects history from a [Repository],
//! builds the changelog and writes it. Kept separate from `main.rs` so the
//! workflow can run programmatically (and in tests) without clap.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::boundary::{self, BoundaryWarning};
use crate::changelog::{ChangelogBuilder, ChangelogDocument};
use crate::config::Config;
use crate::domain::{BranchContext, Commit, TagFilter, TaggedCommit};
use crate::error::{ChangelogError, Result};
use crate::git::Repository;
use crate::{template, ui, writer};

/// Arguments for the changelog workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap. Values set
/// here override the configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangelogWorkflowArgs {
    /// Development branch the changelog must be generated on
    pub branch: Option<String>,

    /// Release version for the unreleased section
    pub version: Option<String>,

    /// Output file
    pub changelog_path: Option<PathBuf>,

    /// Custom template file
    pub template_path: Option<PathBuf>,

    /// Allow prompts for missing values and confirmation
    pub interactive: bool,

    /// Regenerate the complete history even if the changelog exists
    pub full: bool,

    /// Print the changelog instead of writing it
    pub dry_run: bool,
}

/// Settings after merging arguments, configuration and prompts
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub development_branch: String,
    pub version: String,
    pub changelog_path: PathBuf,
    pub template_path: Option<PathBuf>,
    pub tag_pattern: Option<String>,
    pub include_untagged_history: bool,
}

/// The slice of history a run covers
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryScope {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Tags bounding sections, oldest first
    pub tagged_commits: Vec<TaggedCommit>,
    /// Only the unreleased section is regenerated
    pub partial: bool,
}

/// Result of a completed changelog workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub changelog_path: PathBuf,
    pub document: ChangelogDocument,
    pub rendered: String,
    pub warnings: Vec<BoundaryWarning>,
    /// False for dry runs
    pub written: bool,
}

/// How a workflow run ended
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    Completed(WorkflowResult),
    Cancelled,
}

/// Merge arguments over configuration, prompting for gaps when interactive.
///
/// The development branch falls back to the current branch. The release
/// version has no fallback: without a prompt it is a configuration error.
pub fn resolve_settings<R: Repository>(
    args: &ChangelogWorkflowArgs,
    config: &Config,
    repo: &R,
) -> Result<ResolvedSettings> {
    let development_branch = match args
        .branch
        .clone()
        .or_else(|| config.release.development_branch.clone())
    {
        Some(branch) => branch,
        None => {
            let current = repo.current_branch()?;
            if args.interactive {
                ui::prompt_with_default("Development branch", &current)?
            } else {
                current
            }
        }
    };

    let version = match args
        .version
        .clone()
        .or_else(|| config.release.version.clone())
        .filter(|v| !v.trim().is_empty())
    {
        Some(version) => version,
        None if args.interactive => ui::prompt_required("Release version")?,
        None => {
            return Err(ChangelogError::config(
                "Release version is required (set release.version or pass --release-version)",
            ))
        }
    };

    Ok(ResolvedSettings {
        development_branch,
        version,
        changelog_path: args
            .changelog_path
            .clone()
            .unwrap_or_else(|| config.changelog.path.clone()),
        template_path: args
            .template_path
            .clone()
            .or_else(|| config.changelog.template_path.clone()),
        tag_pattern: config.changelog.tag_pattern.clone(),
        include_untagged_history: config.changelog.include_untagged_history,
    })
}

/// Choose the history range and boundary tags for a run.
///
/// The full range runs from the first to the latest commit. When the
/// changelog already exists and `full` is not requested, only the history
/// since the last tag is collected and that tag is the sole boundary.
pub fn select_history_scope(
    first: &Commit,
    latest: &Commit,
    tagged_commits: Vec<TaggedCommit>,
    changelog_exists: bool,
    full: bool,
) -> HistoryScope {
    if changelog_exists && !full {
        if let Some(last) = tagged_commits.last().cloned() {
            return HistoryScope {
                start: last.timestamp(),
                end: latest.timestamp,
                tagged_commits: vec![last],
                partial: true,
            };
        }
    }

    HistoryScope {
        start: first.timestamp,
        end: latest.timestamp,
        tagged_commits,
        partial: false,
    }
}

/// Main changelog workflow
///
/// 1. Resolve settings and check the development branch
/// 2. Confirm with the user (interactive runs only)
/// 3. Collect commits and release tags in scope
/// 4. Build, render and write the changelog
///
/// # Returns
/// * `Ok(WorkflowOutcome::Completed)` - Changelog built (and written unless dry run)
/// * `Ok(WorkflowOutcome::Cancelled)` - User declined the confirmation
/// * `Err` - Any git, configuration, template or I/O failure
pub fn run_changelog_workflow<R: Repository>(
    args: &ChangelogWorkflowArgs,
    config: &Config,
    repo: &R,
) -> Result<WorkflowOutcome> {
    let settings = resolve_settings(args, config, repo)?;

    BranchContext::new(repo.current_branch()?).ensure_is(&settings.development_branch)?;

    ui::display_config(
        &settings.development_branch,
        &settings.version,
        &settings.changelog_path,
        settings.template_path.as_deref(),
        args.dry_run,
    );

    if args.interactive && !ui::confirm_action("Are you ready for creating the changelog?")? {
        return Ok(WorkflowOutcome::Cancelled);
    }

    // Parse the template before touching history so a bad template fails fast
    let template = template::load_template(settings.template_path.as_deref())?;
    let tag_filter = TagFilter::new(settings.tag_pattern.as_deref())?;

    let first = repo.first_commit()?;
    let latest = repo.latest_commit()?;
    let tagged_commits = tag_filter.apply(repo.tagged_commits()?);

    let scope = select_history_scope(
        &first,
        &latest,
        tagged_commits,
        settings.changelog_path.exists(),
        args.full,
    );

    let mut warnings = Vec::new();
    if scope.partial {
        if let Some(last) = scope.tagged_commits.last() {
            warnings.push(BoundaryWarning::PartialRegeneration {
                path: settings.changelog_path.clone(),
                from_tag: last.tag.clone(),
            });
        }
    }

    info!(start = %scope.start, end = %scope.end, "collecting commits");
    let commits = repo.commits_between(scope.start, scope.end)?;
    debug!(
        commits = commits.len(),
        tags = scope.tagged_commits.len(),
        "history collected"
    );

    let document = ChangelogBuilder::new(&commits, &scope.tagged_commits)
        .with_genesis_section(settings.include_untagged_history && !scope.partial)
        .build(&settings.version);

    warnings.extend(boundary::check_boundaries(&document, &scope.tagged_commits));
    for warning in &warnings {
        warn!("{}", warning);
        ui::display_boundary_warning(warning);
    }

    ui::display_section_summary(&document, args.dry_run);

    let rendered = template.render(&document)?;

    // Dry runs keep stdout for the changelog alone; reports went to stderr
    if args.dry_run {
        print!("{}", rendered);
    } else {
        ui::display_status("Generating changelog...");
        writer::write_changelog(&settings.changelog_path, &rendered)?;
        info!(path = %settings.changelog_path.display(), "changelog written");
    }

    Ok(WorkflowOutcome::Completed(WorkflowResult {
        changelog_path: settings.changelog_path,
        document,
        rendered,
        warnings,
        written: !args.dry_run,
    }))
}
