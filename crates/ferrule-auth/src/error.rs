//! Password hashing error types

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

/// Password hashing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Hashing or hash parsing failed
    #[error("Cryptographic error: {message}")]
    Crypto { message: String },

    /// Hasher configuration is unusable
    #[error("Password hashing configuration error: {message}")]
    Config { message: String },
}

impl AuthError {
    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Crypto { .. } => "CRYPTOGRAPHIC_ERROR",
            AuthError::Config { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Create a cryptographic error
    pub fn crypto_error(message: impl Into<String>) -> Self {
        Self::Crypto { message: message.into() }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::crypto_error(err.to_string())
    }
}

#[cfg(feature = "argon2")]
impl From<argon2::Error> for AuthError {
    fn from(err: argon2::Error) -> Self {
        Self::crypto_error(err.to_string())
    }
}

#[cfg(feature = "argon2")]
impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::crypto_error(err.to_string())
    }
}

impl From<ferrule_config::ConfigError> for AuthError {
    fn from(err: ferrule_config::ConfigError) -> Self {
        Self::config_error(err.to_string())
    }
}
