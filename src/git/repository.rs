use chrono::{DateTime, TimeZone, Utc};
use git2::{Repository as Git2Repo, Sort};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

use crate::domain::{Commit, TaggedCommit};
use crate::error::{ChangelogError, Result};

/// Wrapper around git2::Repository with our trait interface
///
/// History reachable from HEAD is walked once and cached for the lifetime
/// of the wrapper.
pub struct Git2Repository {
    repo: Git2Repo,
    history: OnceCell<Vec<Commit>>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            history: OnceCell::new(),
        }
    }

    /// History reachable from HEAD, sorted by commit time
    fn history(&self) -> Result<&[Commit]> {
        if let Some(history) = self.history.get() {
            return Ok(history);
        }

        let walked = self.walk_history()?;
        Ok(self.history.get_or_init(|| walked))
    }

    fn walk_history(&self) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)?;
        revwalk.push_head()?;

        let mut commits = Vec::new();
        for oid in revwalk {
            commits.push(to_commit(&self.repo.find_commit(oid?)?)?);
        }

        // Stable: commits with equal timestamps keep topological order
        commits.sort_by_key(|c| c.timestamp);

        debug!(count = commits.len(), "walked history");
        Ok(commits)
    }

    /// Map each tagged commit hash to its tag names, sorted by name
    fn tag_targets(&self) -> Result<HashMap<String, Vec<String>>> {
        let mut targets: HashMap<String, Vec<String>> = HashMap::new();

        for name in self.repo.tag_names(None)?.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            // Tags pointing at trees or blobs cannot bound a release
            match reference.peel_to_commit() {
                Ok(commit) => targets
                    .entry(commit.id().to_string())
                    .or_default()
                    .push(name.to_string()),
                Err(e) => debug!(tag = name, error = %e, "skipping tag without commit"),
            }
        }

        for names in targets.values_mut() {
            names.sort();
        }

        Ok(targets)
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(ChangelogError::branch("HEAD is detached"));
        }

        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| ChangelogError::branch("Branch name is not valid UTF-8"))
    }

    fn first_commit(&self) -> Result<Commit> {
        self.history()?
            .first()
            .cloned()
            .ok_or_else(|| ChangelogError::branch("Repository has no commits"))
    }

    fn latest_commit(&self) -> Result<Commit> {
        self.history()?
            .last()
            .cloned()
            .ok_or_else(|| ChangelogError::branch("Repository has no commits"))
    }

    #[instrument(skip(self))]
    fn tagged_commits(&self) -> Result<Vec<TaggedCommit>> {
        let targets = self.tag_targets()?;
        let mut tagged = Vec::new();

        for commit in self.history()? {
            if let Some(names) = targets.get(&commit.hash) {
                for name in names {
                    tagged.push(TaggedCommit::new(name.clone(), commit.clone()));
                }
            }
        }

        debug!(count = tagged.len(), "collected tagged commits");
        Ok(tagged)
    }

    #[instrument(skip(self), fields(start = %start, end = %end))]
    fn commits_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Commit>> {
        let commits: Vec<Commit> = self
            .history()?
            .iter()
            .filter(|c| c.timestamp >= start && c.timestamp <= end)
            .cloned()
            .collect();

        debug!(count = commits.len(), "collected commits in range");
        Ok(commits)
    }
}

/// Convert a git2 commit, keeping only the summary line as the message
fn to_commit(commit: &git2::Commit<'_>) -> Result<Commit> {
    let message = commit.summary().unwrap_or("(empty message)").to_string();
    let id = commit.id().to_string();
    let timestamp = commit_time(&id, commit.time().seconds())?;

    Ok(Commit::new(id, message, timestamp))
}

fn commit_time(id: &str, seconds: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single().ok_or_else(|| {
        ChangelogError::Git(git2::Error::from_str(&format!(
            "commit {} has an unrepresentable time ({}s)",
            id, seconds
        )))
    })
}
