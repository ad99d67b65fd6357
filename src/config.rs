use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "changelog.toml";

/// Changelog file written when none is configured
pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";

/// Represents the complete configuration for git-changelog.
///
/// Contains the release being prepared and where/how its changelog is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// The release the changelog is generated for.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReleaseConfig {
    /// Branch the changelog must be generated from
    #[serde(default)]
    pub development_branch: Option<String>,

    /// Version used as the header of the unreleased section
    #[serde(default)]
    pub version: Option<String>,
}

fn default_changelog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHANGELOG_PATH)
}

/// Output and rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,

    /// Custom template; the built-in template is used when unset
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Regex selecting the tags that mark releases
    #[serde(default)]
    pub tag_pattern: Option<String>,

    /// Emit a section for the commits before the first tag
    #[serde(default)]
    pub include_untagged_history: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
            template_path: None,
            tag_pattern: None,
            include_untagged_history: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `changelog.toml` in current directory
/// 3. `git-changelog/config.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ChangelogError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| ChangelogError::config(format!("Cannot parse {}: {}", path.display(), e)))
}

/// Parse configuration from TOML source
pub fn parse_config(source: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(source)
}

fn discover_config() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("git-changelog").join("config.toml"))
        .filter(|path| path.exists())
}
