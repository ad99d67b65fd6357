//! Changelog core - partitions commit history into release sections
//!
//! The [ChangelogBuilder] is a pure function of its inputs: commits and tagged
//! commits sorted oldest first plus the version being released. It produces a
//! [ChangelogDocument] whose sections are ordered newest interval first, each
//! listing its changes newest commit first.
//!
//! ```rust
//! # use git_changelog::changelog::ChangelogBuilder;
//! # use git_changelog::domain::{Commit, TaggedCommit};
//! # use chrono::{TimeZone, Utc};
//! let at = |s| Utc.timestamp_opt(s, 0).unwrap();
//! let commits = vec![
//!     Commit::new("a1", "initial import", at(1)),
//!     Commit::new("b2", "add parser", at(2)),
//!     Commit::new("c3", "fix parser", at(3)),
//! ];
//! let tags = vec![TaggedCommit::new("v0.1.0", commits[1].clone())];
//!
//! let doc = ChangelogBuilder::new(&commits, &tags).build("v0.2.0");
//! assert_eq!(doc.sections.len(), 1);
//! assert_eq!(doc.sections[0].header_from, "v0.1.0");
//! assert_eq!(doc.sections[0].changes, ["fix parser", "add parser"]);
//! ```

pub mod builder;
pub mod model;

pub use builder::{commits_between, ChangelogBuilder};
pub use model::{ChangelogDocument, ChangelogSection};
