pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod template;
pub mod ui;
pub mod writer;

pub use error::{ChangelogError, Result};
