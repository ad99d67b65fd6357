use chrono::{DateTime, Utc};
use tracing::debug;

use crate::changelog::{ChangelogDocument, ChangelogSection};
use crate::domain::{Commit, TaggedCommit};

/// Partitions commit history into per-release sections.
///
/// Both inputs must be sorted oldest first. The builder never validates the
/// ordering: unsorted input produces unspecified section contents.
#[derive(Debug, Clone, Copy)]
pub struct ChangelogBuilder<'a> {
    commits: &'a [Commit],
    tagged_commits: &'a [TaggedCommit],
    genesis_section: bool,
}

impl<'a> ChangelogBuilder<'a> {
    pub fn new(commits: &'a [Commit], tagged_commits: &'a [TaggedCommit]) -> Self {
        ChangelogBuilder {
            commits,
            tagged_commits,
            genesis_section: false,
        }
    }

    /// Also emit a section for the commits that precede the first tag.
    ///
    /// Has no effect when there are no tags, since the single catch-all
    /// section already starts at the beginning of history.
    pub fn with_genesis_section(mut self, enabled: bool) -> Self {
        self.genesis_section = enabled;
        self
    }

    /// Build the changelog document for the given release version
    pub fn build(&self, version: &str) -> ChangelogDocument {
        let mut sections = Vec::with_capacity(self.tagged_commits.len() + 1);

        match self.tagged_commits {
            [] => sections.push(self.section(None, None, "", version)),
            [.., last] => {
                if self.genesis_section {
                    let first = &self.tagged_commits[0];
                    sections.push(self.section(None, Some(first.timestamp()), "", &first.tag));
                }

                for pair in self.tagged_commits.windows(2) {
                    let (start, end) = (&pair[0], &pair[1]);
                    sections.push(self.section(
                        Some(start.timestamp()),
                        Some(end.timestamp()),
                        &start.tag,
                        &end.tag,
                    ));
                }

                sections.push(self.section(Some(last.timestamp()), None, &last.tag, version));
            }
        }

        sections.reverse();

        debug!(
            version,
            sections = sections.len(),
            commits = self.commits.len(),
            "built changelog"
        );

        ChangelogDocument {
            version: version.to_string(),
            sections,
        }
    }

    fn section(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        header_from: &str,
        header_to: &str,
    ) -> ChangelogSection {
        let changes = commits_between(start, end, self.commits)
            .into_iter()
            .rev()
            .map(|commit| commit.message.clone())
            .collect();

        ChangelogSection {
            header_from: header_from.to_string(),
            header_to: header_to.to_string(),
            changes,
        }
    }
}

/// Collect the commits inside the half-open interval `[start, end)`.
///
/// A missing bound is open. The scan starts collecting at the first commit
/// at or after `start` and stops at the first collected-phase commit at or
/// after `end`, so `commits` must be sorted oldest first. The result keeps
/// the input order.
pub fn commits_between<'c>(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    commits: &'c [Commit],
) -> Vec<&'c Commit> {
    let mut relevant = Vec::new();
    let mut collecting = false;

    for commit in commits {
        if !collecting && start.map_or(true, |start| start <= commit.timestamp) {
            collecting = true;
        }

        if collecting && end.is_some_and(|end| end <= commit.timestamp) {
            break;
        }

        if collecting {
            relevant.push(commit);
        }
    }

    relevant
}
