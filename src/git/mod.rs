//! Git access abstraction layer
//!
//! This module provides a trait-based abstraction over the history queries the
//! changelog workflow needs, so the workflow can run against a real repository
//! or an in-memory one in tests.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! All commit lists are returned sorted by commit time, oldest first, which
//! is the order the [ChangelogBuilder](crate::changelog::ChangelogBuilder)
//! expects.
//!
//! ```rust
//! # use git_changelog::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_changelog::Result<()> {
//! let first = repo.first_commit()?;
//! let latest = repo.latest_commit()?;
//! let commits = repo.commits_between(first.timestamp, latest.timestamp)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use chrono::{DateTime, Utc};

use crate::domain::{Commit, TaggedCommit};
use crate::error::Result;

/// History queries used to build a changelog
///
/// Implementations map their underlying errors (like `git2::Error`) into
/// [crate::error::ChangelogError].
pub trait Repository {
    /// Short name of the checked-out branch
    ///
    /// # Returns
    /// * `Ok(String)` - Branch name (e.g., "main")
    /// * `Err` - If HEAD is detached or unreadable
    fn current_branch(&self) -> Result<String>;

    /// The reachable commit with the earliest commit time
    fn first_commit(&self) -> Result<Commit>;

    /// The reachable commit with the latest commit time
    ///
    /// This is HEAD unless committer clocks were skewed.
    fn latest_commit(&self) -> Result<Commit>;

    /// Every tagged commit reachable from HEAD, oldest first
    ///
    /// Handles both lightweight and annotated tags. Commits carrying several
    /// tags appear once per tag.
    fn tagged_commits(&self) -> Result<Vec<TaggedCommit>>;

    /// Commits whose timestamp lies in `[start, end]`, oldest first
    ///
    /// # Arguments
    /// * `start` - Earliest commit time (inclusive)
    /// * `end` - Latest commit time (inclusive)
    fn commits_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Commit>>;
}
