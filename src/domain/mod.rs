//! Domain types - commits, tags and branches independent of git access

pub mod branch;
pub mod commit;
pub mod tag;

pub use branch::BranchContext;
pub use commit::{Commit, TaggedCommit};
pub use tag::TagFilter;
