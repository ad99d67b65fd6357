use serde::Serialize;

/// One release interval of the changelog
///
/// `header_from` is empty when the interval starts at the beginning of history.
/// `header_to` is either the closing tag or the release version being prepared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogSection {
    pub header_from: String,
    pub header_to: String,
    /// Commit messages, newest first
    pub changes: Vec<String>,
}

/// The complete changelog handed to the template renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogDocument {
    pub version: String,
    /// Sections, newest interval first
    pub sections: Vec<ChangelogSection>,
}

impl ChangelogDocument {
    /// Total number of changes across all sections
    pub fn change_count(&self) -> usize {
        self.sections.iter().map(|s| s.changes.len()).sum()
    }

    /// The section ending at the release version being prepared
    pub fn unreleased(&self) -> Option<&ChangelogSection> {
        self.sections.first()
    }
}
