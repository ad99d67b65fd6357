use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single commit as seen by the changelog builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Commit {
    /// Create a new commit record
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Commit {
            hash: hash.into(),
            message: message.into(),
            timestamp,
        }
    }

    /// First seven characters of the hash, for display
    pub fn short_hash(&self) -> &str {
        if self.hash.len() > 7 {
            &self.hash[..7]
        } else {
            &self.hash
        }
    }
}

/// A commit that carries a release tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedCommit {
    pub tag: String,
    pub commit: Commit,
}

impl TaggedCommit {
    /// Attach a tag name to a commit
    pub fn new(tag: impl Into<String>, commit: Commit) -> Self {
        TaggedCommit {
            tag: tag.into(),
            commit,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.commit.timestamp
    }
}
