// tests/integration_test.rs
use git2::{Oid, Repository as Git2Repo, Signature, Time};
use git_changelog::cli::{run_changelog_workflow, ChangelogWorkflowArgs, WorkflowOutcome};
use git_changelog::config::{load_config, Config};
use git_changelog::git::{Git2Repository, Repository};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn commit_at(repo: &Git2Repo, message: &str, secs: i64) -> Oid {
    let sig = Signature::new("Test", "test@example.com", &Time::new(secs, 0)).unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit().unwrap()],
        Err(_) => vec![],
    };
    let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

fn tag(repo: &Git2Repo, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

const EXPECTED_V3_CHANGELOG: &str = "# Current version: v3
===
# Change log
===
### v2 - v3
---
 * m5
 * m4

### v1 - v2
---
 * m3
 * m2

";

/// m1..m5 at t=1000..5000, v1 on m2 and v2 on m4
fn setup_repo() -> (TempDir, Git2Repo) {
    let temp = TempDir::new().unwrap();
    let repo = Git2Repo::init(temp.path()).unwrap();

    commit_at(&repo, "m1", 1_000);
    let m2 = commit_at(&repo, "m2", 2_000);
    commit_at(&repo, "m3", 3_000);
    let m4 = commit_at(&repo, "m4", 4_000);
    commit_at(&repo, "m5", 5_000);

    tag(&repo, "v1", m2);
    tag(&repo, "v2", m4);

    (temp, repo)
}

#[test]
fn test_git_changelog_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_git-changelog"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git-changelog"));
    assert!(stdout.contains("Generate a changelog from git history"));
    assert!(stdout.contains("--release-version"));
}

#[test]
fn test_git_changelog_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_git-changelog"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("git-changelog "));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    assert!(load_config(Some(&missing)).is_err());
}

#[test]
fn test_end_to_end_against_real_repository() {
    let (temp, repo) = setup_repo();
    let repo = Git2Repository::from_git2(repo);
    let path = temp.path().join("CHANGELOG.md");

    let args = ChangelogWorkflowArgs {
        version: Some("v3".to_string()),
        changelog_path: Some(path.clone()),
        ..Default::default()
    };
    let config = Config::default();

    let outcome = run_changelog_workflow(&args, &config, &repo).unwrap();
    assert!(matches!(outcome, WorkflowOutcome::Completed(_)));

    assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED_V3_CHANGELOG);
}

#[test]
fn test_binary_writes_changelog_in_repository() {
    let (temp, repo) = setup_repo();
    let branch = Git2Repository::from_git2(repo).current_branch().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_git-changelog"))
        .current_dir(temp.path())
        .args(["--ci", "--branch", branch.as_str(), "--release-version", "v3"])
        .env("CI", "true")
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written = fs::read_to_string(temp.path().join("CHANGELOG.md")).unwrap();
    assert!(written.contains("### v2 - v3"));
    assert!(written.contains("### v1 - v2"));
}

#[test]
fn test_binary_dry_run_stdout_is_only_the_changelog() {
    let (temp, repo) = setup_repo();
    let branch = Git2Repository::from_git2(repo).current_branch().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_git-changelog"))
        .current_dir(temp.path())
        .args([
            "--ci",
            "--dry-run",
            "--branch",
            branch.as_str(),
            "--release-version",
            "v3",
        ])
        .env("CI", "true")
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, EXPECTED_V3_CHANGELOG);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Your config:"), "stderr: {}", stderr);
    assert!(stderr.contains("Changelog sections:"), "stderr: {}", stderr);
    assert!(!temp.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_end_to_end_with_skewed_commit_times() {
    let temp = TempDir::new().unwrap();
    let repo = Git2Repo::init(temp.path()).unwrap();
    let a = commit_at(&repo, "A", 1_000);
    commit_at(&repo, "B", 5_000);
    commit_at(&repo, "C", 2_000);
    let d = commit_at(&repo, "D", 3_000);
    tag(&repo, "v1", a);
    tag(&repo, "v2", d);

    let repo = Git2Repository::from_git2(repo);
    let args = ChangelogWorkflowArgs {
        version: Some("v3".to_string()),
        changelog_path: Some(temp.path().join("CHANGELOG.md")),
        dry_run: true,
        ..Default::default()
    };

    let result = match run_changelog_workflow(&args, &Config::default(), &repo).unwrap() {
        WorkflowOutcome::Completed(result) => result,
        WorkflowOutcome::Cancelled => panic!("non-interactive run should never be cancelled"),
    };

    let changes: Vec<Vec<String>> = result
        .document
        .sections
        .iter()
        .map(|s| s.changes.clone())
        .collect();
    assert_eq!(changes, vec![vec!["B", "D"], vec!["C", "A"]]);
}

#[test]
fn test_binary_list_tags() {
    let (temp, _repo) = setup_repo();

    let output = Command::new(env!("CARGO_BIN_EXE_git-changelog"))
        .current_dir(temp.path())
        .arg("--list-tags")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("v1"));
    assert!(stdout.contains("v2"));
}
