// tests/config_test.rs
use git_changelog::config::{load_config, Config};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.changelog.path, PathBuf::from("CHANGELOG.md"));
    assert_eq!(config.changelog.template_path, None);
    assert_eq!(config.changelog.tag_pattern, None);
    assert_eq!(config.release.version, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[release]
version = "2.0.0"

[changelog]
path = "HISTORY.md"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.release.version, Some("2.0.0".to_string()));
    assert_eq!(config.release.development_branch, None);
    assert_eq!(config.changelog.path, PathBuf::from("HISTORY.md"));
    assert!(!config.changelog.include_untagged_history);
}

#[test]
fn test_load_full_fixture() {
    let config = load_config(Some(Path::new("tests/fixtures/full_config.toml")))
        .expect("Failed to load test config");

    assert_eq!(
        config.release.development_branch,
        Some("develop".to_string())
    );
    assert_eq!(config.release.version, Some("1.4.0".to_string()));
    assert_eq!(config.changelog.path, PathBuf::from("docs/CHANGELOG.md"));
    assert_eq!(
        config.changelog.template_path,
        Some(PathBuf::from("docs/changelog.tmpl"))
    );
    assert_eq!(
        config.changelog.tag_pattern,
        Some(r"^v\d+\.\d+\.\d+$".to_string())
    );
    assert!(config.changelog.include_untagged_history);
}

#[test]
fn test_invalid_fixture_reports_path() {
    let err = load_config(Some(Path::new("tests/fixtures/invalid_config.toml"))).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Configuration error"), "got: {}", msg);
    assert!(msg.contains("invalid_config.toml"), "got: {}", msg);
}
