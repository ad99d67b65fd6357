use regex::Regex;

use crate::domain::TaggedCommit;
use crate::error::{ChangelogError, Result};

/// Selects which tags count as release boundaries
#[derive(Debug, Clone)]
pub struct TagFilter {
    pattern: Option<Regex>,
}

impl TagFilter {
    /// A filter that accepts every tag
    pub fn any() -> Self {
        TagFilter { pattern: None }
    }

    /// Build a filter from an optional regex pattern
    ///
    /// An empty pattern is treated the same as no pattern.
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        match pattern.map(str::trim) {
            None | Some("") => Ok(Self::any()),
            Some(raw) => {
                let regex = Regex::new(raw).map_err(|e| {
                    ChangelogError::config(format!("Invalid tag pattern '{}': {}", raw, e))
                })?;
                Ok(TagFilter {
                    pattern: Some(regex),
                })
            }
        }
    }

    /// Check a single tag name
    pub fn matches(&self, tag: &str) -> bool {
        self.pattern.as_ref().map_or(true, |re| re.is_match(tag))
    }

    /// Keep only the tagged commits whose tag matches, preserving order
    pub fn apply(&self, tagged_commits: Vec<TaggedCommit>) -> Vec<TaggedCommit> {
        tagged_commits
            .into_iter()
            .filter(|tagged| self.matches(&tagged.tag))
            .collect()
    }
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::any()
    }
}
