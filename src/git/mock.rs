use chrono::{DateTime, Utc};

use crate::domain::{Commit, TaggedCommit};
use crate::error::{ChangelogError, Result};
use crate::git::Repository;

/// In-memory repository for testing without actual git operations
///
/// Commits must be added oldest first, the same order a real history walk
/// returns them in.
pub struct MockRepository {
    branch: String,
    commits: Vec<Commit>,
    tags: Vec<(String, usize)>,
}

impl MockRepository {
    /// Create a new empty mock repository on `main`
    pub fn new() -> Self {
        MockRepository {
            branch: "main".to_string(),
            commits: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Append a commit to the history
    pub fn add_commit(&mut self, commit: Commit) {
        self.commits.push(commit);
    }

    /// Tag the commit with the given hash
    pub fn add_tag(&mut self, name: impl Into<String>, hash: &str) -> Result<()> {
        let index = self
            .commits
            .iter()
            .position(|c| c.hash == hash)
            .ok_or_else(|| ChangelogError::config(format!("Unknown commit: {}", hash)))?;
        self.tags.push((name.into(), index));
        Ok(())
    }

    /// Set the checked-out branch
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    fn no_commits() -> ChangelogError {
        ChangelogError::branch("Repository has no commits")
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn first_commit(&self) -> Result<Commit> {
        self.commits.first().cloned().ok_or_else(Self::no_commits)
    }

    fn latest_commit(&self) -> Result<Commit> {
        self.commits.last().cloned().ok_or_else(Self::no_commits)
    }

    fn tagged_commits(&self) -> Result<Vec<TaggedCommit>> {
        let mut tagged: Vec<TaggedCommit> = self
            .tags
            .iter()
            .map(|(name, index)| TaggedCommit::new(name.clone(), self.commits[*index].clone()))
            .collect();
        tagged.sort_by_key(|t| t.timestamp());
        Ok(tagged)
    }

    fn commits_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Commit>> {
        Ok(self
            .commits
            .iter()
            .filter(|c| c.timestamp >= start && c.timestamp <= end)
            .cloned()
            .collect())
    }
}
