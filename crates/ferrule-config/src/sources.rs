use std::path::{Path, PathBuf};

/// Where a [`Config`](crate::Config) got its values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Values read from a file
    File(PathBuf),
    /// Values parsed from a string or set in code
    Programmatic,
}

impl ConfigSource {
    /// Check if source is a file
    pub fn is_file(&self) -> bool {
        matches!(self, ConfigSource::File(_))
    }

    /// Path of the source file, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::File(path) => Some(path),
            ConfigSource::Programmatic => None,
        }
    }

    /// Get source description
    pub fn description(&self) -> String {
        match self {
            ConfigSource::File(path) => format!("Configuration file: {}", path.display()),
            ConfigSource::Programmatic => "Programmatically set".to_string(),
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
