//! Flat key-value configuration
//!
//! A line of the form `KEY = value` sets `KEY`, where the key is made of
//! ASCII letters, digits, `_` and `-`. The line is split on its first `=`
//! and spaces around key and value are dropped, so values may contain `=`
//! and keep inner whitespace. Every other line is ignored, which makes `#`
//! comments and blank lines free. When a key repeats, the last line wins.

use crate::error::{ConfigError, ConfigResult};
use crate::sources::ConfigSource;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

static KEY_VALUE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+\s*=.*$").expect("key-value pattern is valid"));

/// Configuration values keyed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    values: HashMap<String, String>,
    source: ConfigSource,
}

impl Config {
    /// Read and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let values = parse_lines(&content);

        tracing::debug!(path = %path.display(), keys = values.len(), "Loaded configuration file");

        Ok(Self {
            values,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }

    /// Parse configuration text held in memory
    pub fn parse(content: &str) -> Self {
        Self::from_values(parse_lines(content))
    }

    /// Wrap values built in code
    pub fn from_values(values: HashMap<String, String>) -> Self {
        Self {
            values,
            source: ConfigSource::Programmatic,
        }
    }

    /// Set a value, returning the previous one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Value for `key`, or `""` when it is not set
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Whether `key` is set to a non-empty value
    pub fn has(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    /// Value for `key`, or `fallback` when it is missing or empty
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        match self.get(key) {
            "" => fallback,
            value => value,
        }
    }

    /// Value for `key`, failing when it is missing or empty
    pub fn require(&self, key: &str) -> ConfigResult<&str> {
        match self.get(key) {
            "" => Err(ConfigError::missing(key)),
            value => Ok(value),
        }
    }

    /// Parse the value for `key`. Missing or empty values yield `Ok(None)`.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> ConfigResult<Option<T>> {
        match self.get(key) {
            "" => Ok(None),
            value => value.parse().map(Some).map_err(|_| {
                ConfigError::invalid_value(key, value, std::any::type_name::<T>())
            }),
        }
    }

    /// All values, including keys set to `""`
    pub fn all(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn into_values(self) -> HashMap<String, String> {
        self.values
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(HashMap::new())
    }
}

impl FromStr for Config {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn parse_lines(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .filter(|line| KEY_VALUE_LINE.is_match(line))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim_matches(' ').to_string(), value.trim_matches(' ').to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value_lines() {
        let config = Config::parse("NAME = ferrule\nEMPTY=\nURL = postgres://u:p@host/db?sslmode=require\n");

        assert_eq!(config.get("NAME"), "ferrule");
        assert_eq!(config.get("EMPTY"), "");
        assert_eq!(config.get("URL"), "postgres://u:p@host/db?sslmode=require");
        assert_eq!(config.len(), 3);
        assert_eq!(config.source(), &ConfigSource::Programmatic);
    }

    #[test]
    fn test_ignores_comments_blank_and_malformed_lines() {
        let config = Config::parse("# NAME = commented\n\n  INDENTED = no\nbad key = no\nvalid-key_1 = yes\n");

        assert_eq!(config.len(), 1);
        assert_eq!(config.get("valid-key_1"), "yes");
        assert!(!config.all().contains_key("INDENTED"));
    }

    #[test]
    fn test_only_spaces_are_trimmed() {
        let config = Config::parse("GREETING =   hello world  \nTABBED=\tvalue\t\n");
        assert_eq!(config.get("GREETING"), "hello world");
        assert_eq!(config.get("TABBED"), "\tvalue\t");
    }

    #[test]
    fn test_later_duplicates_win() {
        let config = Config::parse("MODE=dev\nMODE=prod\n");
        assert_eq!(config.get("MODE"), "prod");
    }

    #[test]
    fn test_has_and_fallback_treat_empty_as_missing() {
        let config = Config::parse("EMPTY=\nSET=1\n");

        assert!(config.has("SET"));
        assert!(!config.has("EMPTY"));
        assert!(!config.has("ABSENT"));
        assert_eq!(config.get_or("EMPTY", "fallback"), "fallback");
        assert_eq!(config.get_or("ABSENT", "fallback"), "fallback");
        assert_eq!(config.get_or("SET", "fallback"), "1");
    }

    #[test]
    fn test_require_and_get_parsed() {
        let config = Config::parse("PORT=8080\nWORKERS=many\nDEBUG=\n");

        assert_eq!(config.require("PORT").unwrap(), "8080");
        assert!(matches!(
            config.require("DEBUG"),
            Err(ConfigError::Missing { key }) if key == "DEBUG"
        ));

        assert_eq!(config.get_parsed::<u16>("PORT").unwrap(), Some(8080));
        assert_eq!(config.get_parsed::<u16>("DEBUG").unwrap(), None);
        assert!(matches!(
            config.get_parsed::<u32>("WORKERS"),
            Err(ConfigError::InvalidValue { value, .. }) if value == "many"
        ));
    }

    #[test]
    fn test_set_on_programmatic_config() {
        let mut config = Config::default();
        assert!(config.is_empty());
        assert_eq!(config.set("KEY", "one"), None);
        assert_eq!(config.set("KEY", "two"), Some("one".to_string()));
        assert_eq!(config.get("KEY"), "two");
    }
}
