//! Input parsing errors

use thiserror::Error;

/// Result type for input parsing
pub type InputResult<T> = Result<T, InputError>;

/// Request input that could not be decoded
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid form data: {0}")]
    InvalidForm(#[from] serde_urlencoded::de::Error),

    #[error("Invalid UTF-8 in request body: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl InputError {
    /// Error code suitable for an API response body
    pub fn error_code(&self) -> &'static str {
        match self {
            InputError::InvalidJson(_) => "invalid_json",
            InputError::InvalidForm(_) => "invalid_form",
            InputError::InvalidUtf8(_) => "invalid_encoding",
        }
    }
}
