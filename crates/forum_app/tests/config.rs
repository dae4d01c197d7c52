use std::fs;
use std::path::PathBuf;

use forum_app::config::{AppConfig, ConfigError, LogDestination};
use log::LevelFilter;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = AppConfig::load(&dir.path().join("absent.ron")).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.site().unwrap().as_str(), "https://www.v2ex.com/");
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("forum_reader.ron");
    fs::write(
        &path,
        r#"(site_url: "https://forum.example.org", log_destination: Both, log_level: "debug")"#,
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.site_url, "https://forum.example.org");
    assert_eq!(config.log_destination, LogDestination::Both);
    assert_eq!(config.level(), LevelFilter::Debug);
    assert_eq!(config.log_file, PathBuf::from("./forum_reader.log"));
    assert_eq!(config.max_spans_per_comment, 5_000);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.ron");
    fs::write(&path, "(site_url: ").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn unparsable_site_url_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.ron");
    fs::write(&path, r#"(site_url: "not a url")"#).unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::SiteUrl(_)), "{err}");
}

#[test]
fn unknown_level_falls_back_to_info() {
    let config = AppConfig {
        log_level: "chatty".to_string(),
        ..AppConfig::default()
    };
    assert_eq!(config.level(), LevelFilter::Info);
}
