//! # Prelude
//!
//! Convenient imports for common ferrule functionality.
//!
//! ```rust
//! use ferrule::prelude::*;
//! ```

// Validation
pub use crate::{
    register_rule, validate, FieldValues, RuleSet, ValidationErrors, ValidationResult,
    ValidationRules, Validator,
};
pub use ferrule_validation::RuleContext;

// Collaborators
pub use crate::{Config, Crypto, Input, PasswordHasher};

// Logging
pub use crate::{init_logging, LoggingConfig};

// JSON helper
pub use serde_json::json;

// Common derives
pub use serde::{Deserialize, Serialize};
