use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use git_changelog::cli::{run_changelog_workflow, ChangelogWorkflowArgs, WorkflowOutcome};
use git_changelog::config;
use git_changelog::domain::TagFilter;
use git_changelog::git::{Git2Repository, Repository};
use git_changelog::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    about = "Generate a changelog from git history, grouped by release tags"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Development branch the changelog is generated on")]
    branch: Option<String>,

    #[arg(short, long, help = "Version of the release being prepared")]
    release_version: Option<String>,

    #[arg(long, help = "Changelog file to write")]
    changelog_path: Option<PathBuf>,

    #[arg(long, help = "Template file used to render the changelog")]
    template_path: Option<PathBuf>,

    #[arg(long, help = "Never prompt; fail on missing values instead")]
    ci: bool,

    #[arg(long, help = "Regenerate the complete history even if the changelog exists")]
    full: bool,

    #[arg(long, help = "Print the changelog instead of writing it")]
    dry_run: bool,

    #[arg(long, help = "Show the release tags that bound sections and exit")]
    list_tags: bool,

    #[arg(long, action = ArgAction::Count, help = "Increase log verbosity (repeatable)")]
    verbose: u8,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-changelog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    if args.list_tags {
        let filter = TagFilter::new(config.changelog.tag_pattern.as_deref())?;
        ui::display_tags(&filter.apply(repo.tagged_commits()?));
        return Ok(());
    }

    let workflow_args = ChangelogWorkflowArgs {
        branch: args.branch,
        version: args.release_version,
        changelog_path: args.changelog_path,
        template_path: args.template_path,
        interactive: ui::is_interactive(args.ci),
        full: args.full,
        dry_run: args.dry_run,
    };

    match run_changelog_workflow(&workflow_args, &config, &repo) {
        Ok(WorkflowOutcome::Completed(result)) => {
            if result.written {
                ui::display_success(&format!(
                    "{} changelog created ({})",
                    result.document.version,
                    result.changelog_path.display()
                ));
            }
        }
        Ok(WorkflowOutcome::Cancelled) => {
            println!("Operation cancelled by user.");
        }
        Err(e) => {
            ui::display_error(&format!("Failed to create changelog: {}", e));
            std::process::exit(1);
        }
    }

    Ok(())
}
