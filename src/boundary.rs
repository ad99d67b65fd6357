use std::fmt;
use std::path::PathBuf;

use semver::Version;

use crate::changelog::ChangelogDocument;
use crate::domain::TaggedCommit;

/// Non-fatal conditions found while collecting history near release boundaries.
/// These are reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No release tags found; the changelog has a single section
    NoTags,
    /// Nothing was committed since the latest tag
    NoNewCommits { latest_tag: String },
    /// The release version does not sort after the latest tag
    VersionNotNewer { version: String, latest_tag: String },
    /// The changelog exists, so only the unreleased section is regenerated
    PartialRegeneration { path: PathBuf, from_tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTags => {
                write!(f, "No release tags found; all commits go into one section")
            }
            BoundaryWarning::NoNewCommits { latest_tag } => {
                write!(f, "No new commits since tag '{}'", latest_tag)
            }
            BoundaryWarning::VersionNotNewer {
                version,
                latest_tag,
            } => {
                write!(
                    f,
                    "Release version '{}' is not newer than latest tag '{}'",
                    version, latest_tag
                )
            }
            BoundaryWarning::PartialRegeneration { path, from_tag } => {
                write!(
                    f,
                    "{} already exists; regenerating only changes since '{}' (use --full for complete history)",
                    path.display(),
                    from_tag
                )
            }
        }
    }
}

/// Parse a tag or version string as semver, ignoring a leading `v`/`V`.
pub fn parse_release_version(raw: &str) -> Option<Version> {
    let trimmed = raw.trim().trim_start_matches(['v', 'V']);
    Version::parse(trimmed).ok()
}

/// Collect the warnings that apply to a built changelog.
///
/// # Arguments
/// * `document` - The built changelog
/// * `tagged_commits` - Tags that bounded the sections, oldest first
pub fn check_boundaries(
    document: &ChangelogDocument,
    tagged_commits: &[TaggedCommit],
) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    let Some(latest) = tagged_commits.last() else {
        warnings.push(BoundaryWarning::NoTags);
        return warnings;
    };

    if document
        .unreleased()
        .is_some_and(|section| section.changes.is_empty())
    {
        warnings.push(BoundaryWarning::NoNewCommits {
            latest_tag: latest.tag.clone(),
        });
    }

    if let (Some(version), Some(tagged)) = (
        parse_release_version(&document.version),
        parse_release_version(&latest.tag),
    ) {
        if version <= tagged {
            warnings.push(BoundaryWarning::VersionNotNewer {
                version: document.version.clone(),
                latest_tag: latest.tag.clone(),
            });
        }
    }

    warnings
}
