//! # ferrule-security
//!
//! Authenticated symmetric encryption for short strings such as cookie
//! payloads and stored API tokens.

pub mod crypto;

pub use crypto::{Crypto, APP_KEY};

/// Common result type for security operations
pub type SecurityResult<T> = Result<T, SecurityError>;

/// Security-related errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    #[error("Invalid encryption key: {message}")]
    InvalidKey { message: String },

    #[error("Encryption failed: {message}")]
    EncryptionFailed { message: String },

    #[error("Decryption failed: {message}")]
    DecryptionFailed { message: String },

    #[error("Invalid encrypted data: {message}")]
    InvalidData { message: String },
}

impl SecurityError {
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey { message: message.into() }
    }

    pub fn encryption_failed(message: impl Into<String>) -> Self {
        Self::EncryptionFailed { message: message.into() }
    }

    pub fn decryption_failed(message: impl Into<String>) -> Self {
        Self::DecryptionFailed { message: message.into() }
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData { message: message.into() }
    }
}
