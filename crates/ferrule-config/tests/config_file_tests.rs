//! Loading configuration from files on disk

use ferrule_config::{Config, ConfigError, ConfigSource};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn load_reads_values_and_records_source() {
    let file = config_file("# app settings\r\nAPP_NAME = demo\r\nAPP_KEY=base64:abc=\r\n");
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.get("APP_NAME"), "demo");
    assert_eq!(config.get("APP_KEY"), "base64:abc=");
    assert_eq!(config.source(), &ConfigSource::File(file.path().to_path_buf()));
    assert!(config.source().to_string().starts_with("Configuration file: "));
}

#[test]
fn load_empty_file_yields_empty_config() {
    let file = config_file("");
    let config = Config::load(file.path()).unwrap();
    assert!(config.is_empty());
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("missing.env")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
