use crate::error::{ChangelogError, Result};

/// The branch a changelog is being generated on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
}

impl BranchContext {
    /// Create a new branch context
    pub fn new(name: impl Into<String>) -> Self {
        BranchContext { name: name.into() }
    }

    /// Fail unless this is the configured development branch
    pub fn ensure_is(&self, development_branch: &str) -> Result<()> {
        if self.name == development_branch {
            Ok(())
        } else {
            Err(ChangelogError::branch(format!(
                "Current branch '{}' is not the development branch '{}'",
                self.name, development_branch
            )))
        }
    }
}
