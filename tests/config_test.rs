//! Tests for client configuration loading.

use bulls_cows::{ClientConfig, Difficulty};
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(ClientConfig::from_file(&path).is_err());

    let config = ClientConfig::load_with_env(&path, None).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_base(), "http://localhost:8080");
    assert_eq!(*config.difficulty(), Difficulty::Easy);

    let config = ClientConfig::load(&path).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Easy);
}

#[test]
fn test_load_applies_environment_over_file_and_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_base = \"http://games.local:9000\"").unwrap();
    writeln!(file, "difficulty = \"hard\"").unwrap();

    let env = Some("http://env.local:7000".to_string());
    let config = ClientConfig::load_with_env(file.path(), env).unwrap();
    assert_eq!(config.api_base(), "http://env.local:7000");
    assert_eq!(*config.difficulty(), Difficulty::Hard);

    let config = ClientConfig::load_with_env(file.path(), Some(String::new())).unwrap();
    assert_eq!(config.api_base(), "http://games.local:9000");

    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig::load_with_env(
        &dir.path().join("absent.toml"),
        Some("http://env.local:7000".to_string()),
    )
    .unwrap();
    assert_eq!(config.api_base(), "http://env.local:7000");
    assert_eq!(*config.difficulty(), Difficulty::Easy);
}

#[test]
fn test_load_reports_unreadable_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_base = [").unwrap();
    let err = ClientConfig::load_with_env(file.path(), None).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_file_values_and_partial_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api_base = \"http://games.local:9000\"").unwrap();
    writeln!(file, "difficulty = \"medium\"").unwrap();
    let config = ClientConfig::from_file(file.path()).unwrap();
    assert_eq!(config.api_base(), "http://games.local:9000");
    assert_eq!(*config.difficulty(), Difficulty::Medium);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"hard\"").unwrap();
    let config = ClientConfig::from_file(file.path()).unwrap();
    assert_eq!(config.api_base(), "http://localhost:8080");
    assert_eq!(*config.difficulty(), Difficulty::Hard);
}

#[test]
fn test_bad_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"nightmare\"").unwrap();
    let err = ClientConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_precedence_cli_over_env_over_file() {
    let file_config = ClientConfig::new("http://from-file".to_string(), Difficulty::Medium);

    let env_config = file_config
        .clone()
        .with_env_override(Some("http://from-env".to_string()));
    assert_eq!(env_config.api_base(), "http://from-env");

    let unchanged = file_config.clone().with_env_override(Some("  ".to_string()));
    assert_eq!(unchanged.api_base(), "http://from-file");

    let cli_config = env_config.with_overrides(Some("http://from-cli".to_string()), None);
    assert_eq!(cli_config.api_base(), "http://from-cli");
    assert_eq!(*cli_config.difficulty(), Difficulty::Medium);

    let cli_config = cli_config.with_overrides(None, Some(Difficulty::Hard));
    assert_eq!(cli_config.api_base(), "http://from-cli");
    assert_eq!(*cli_config.difficulty(), Difficulty::Hard);
}
