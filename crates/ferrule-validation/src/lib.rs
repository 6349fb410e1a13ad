//! # ferrule-validation
//!
//! Declarative field validation driven by pipe-delimited rule strings such as
//! `"required|max_chars:20"`. Submitted values are plain text keyed by field
//! name; every rule name resolves to a predicate and a message template in a
//! [`RuleRegistry`].
//!
//! ```
//! use ferrule_validation::{FieldValues, RuleSet, Validator};
//!
//! let rules = RuleSet::new()
//!     .field("name", "required|alpha")
//!     .field("age", "integer|min_value:0");
//!
//! let mut values = FieldValues::new();
//! values.insert("name".to_string(), "Bob".to_string());
//! values.insert("age".to_string(), "42".to_string());
//!
//! assert!(Validator::new().validate(&values, &rules).is_ok());
//! ```
//!
//! The free functions [`validate`] and [`register_rule`] operate on a
//! process-wide registry populated with the built-in rules on first use.

pub mod error;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod validator;
pub mod validators;

pub use error::{ValidationError, ValidationErrors, ValidationResult};
pub use registry::{RuleContext, RuleEntry, RulePredicate, RuleRegistry};
pub use rule::{parse_rule, split_rules, ParsedRule};
pub use rules::{object_to_field_values, to_field_values, FieldValues, RuleSet, ValidationRules};
pub use validator::{global_registry, register_rule, validate, validate_struct, Validator};
