use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required configuration key: {key}")]
    Missing { key: String },

    #[error("Invalid value for configuration key '{key}': '{value}'. Expected: {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    /// Create a missing key error
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}
