//! # ferrule
//!
//! Umbrella package for the ferrule utilities. Each component lives in its
//! own crate and can be used on its own; this crate re-exports them under
//! one roof and adds logging setup.
//!
//! ```
//! use ferrule::prelude::*;
//!
//! let input = Input::parse(None, Some("name=Bob123&age=-5"), b"").unwrap();
//! let rules = RuleSet::new()
//!     .field("name", "required|alpha")
//!     .field("age", "integer|min_value:0");
//!
//! let errors = Validator::new().validate(input.all(), &rules).unwrap_err();
//! assert_eq!(errors.message("name"), Some("The name may only contain letters."));
//! assert_eq!(errors.message("age"), Some("The age must be greater than 0."));
//! ```

// Re-export all sub-packages as modules
pub use ferrule_auth as auth;
pub use ferrule_config as config;
pub use ferrule_http as http;
pub use ferrule_security as security;
pub use ferrule_validation as validation;

pub mod logging;
pub mod prelude;

// Re-export common types at root level for convenience
pub use ferrule_auth::{AuthError, AuthResult, PasswordHasher};
pub use ferrule_config::{Config, ConfigError, ConfigResult, ConfigSource};
pub use ferrule_http::{Input, InputError, InputResult};
pub use ferrule_security::{Crypto, SecurityError, SecurityResult};
pub use ferrule_validation::{
    register_rule, validate, FieldValues, RuleSet, ValidationError, ValidationErrors,
    ValidationResult, ValidationRules, Validator,
};
pub use logging::{init_logging, LoggingConfig};

/// Current version of ferrule
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get ferrule version
pub fn version() -> &'static str {
    VERSION
}
