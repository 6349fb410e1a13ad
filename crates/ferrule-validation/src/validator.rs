//! Evaluation engine and the process-wide default registry

use crate::error::{ValidationErrors, ValidationResult};
use crate::registry::{RuleContext, RuleRegistry};
use crate::rule::{split_rules, ParsedRule};
use crate::rules::{to_field_values, FieldValues, RuleSet, ValidationRules};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};

/// Rule that marks a field as mandatory
pub const REQUIRED_RULE: &str = "required";
/// Marker that forces a field's rules to run even when it is absent or empty.
/// It is never registered, so evaluation skips the token itself.
pub const ALWAYS_RULE: &str = "always";

/// Runs rule sets against submitted values using its own registry
#[derive(Debug, Clone)]
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    /// Create a validator with every built-in rule registered
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_builtins())
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Create a validator from a snapshot of the process-wide registry,
    /// including any rules added through [`register_rule`]
    pub fn from_global() -> Self {
        Self::with_registry(global_registry())
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Add or replace a rule in this validator's registry
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F, template: impl Into<String>) -> &mut Self
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.registry.register(name, predicate, template);
        self
    }

    /// Validate `values` against `rules`, collecting one message per failing field
    pub fn validate(&self, values: &FieldValues, rules: &RuleSet) -> ValidationResult<()> {
        evaluate(&self.registry, values, rules)
    }

    /// Validate a serializable value against its declared rules
    pub fn validate_struct<T>(&self, value: &T) -> ValidationResult<()>
    where
        T: Serialize + ValidationRules,
    {
        evaluate(&self.registry, &struct_values(value), &T::validation_rules())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn struct_values<T: Serialize>(value: &T) -> FieldValues {
    to_field_values(value).unwrap_or_else(|err| {
        tracing::warn!(
            type_name = std::any::type_name::<T>(),
            error = %err,
            "Value could not be flattened into fields, validating as empty"
        );
        FieldValues::new()
    })
}

fn evaluate(registry: &RuleRegistry, values: &FieldValues, rules: &RuleSet) -> ValidationResult<()> {
    let mut errors = ValidationErrors::new();

    for (field, rule_string) in rules.iter() {
        evaluate_field(registry, field, rule_string, values, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(failed_fields = errors.len(), "Validation failed");
        Err(errors)
    }
}

fn evaluate_field(
    registry: &RuleRegistry,
    field: &str,
    rule_string: &str,
    values: &FieldValues,
    errors: &mut ValidationErrors,
) {
    let tokens = split_rules(rule_string);
    let required = tokens.contains(&REQUIRED_RULE);
    let always = tokens.contains(&ALWAYS_RULE);
    let submitted = values.get(field).map(String::as_str);

    if required && submitted.is_none() {
        errors.insert(registry.error(field, &ParsedRule::bare(REQUIRED_RULE)));
        return;
    }

    let present = submitted.is_some_and(|value| !value.is_empty());
    if !(required || always || present) {
        tracing::trace!(field = %field, "Skipping optional field without a value");
        return;
    }

    let value = submitted.unwrap_or_default();
    for token in tokens {
        let rule = ParsedRule::parse(token);
        let Some(predicate) = registry.lookup(&rule.name) else {
            tracing::trace!(field = %field, rule = %rule.name, "Skipping unknown rule");
            continue;
        };

        if !predicate.check(&RuleContext::new(field, value, values, &rule.params)) {
            errors.insert(registry.error(field, &rule));
        }
    }
}

static REGISTRY: Lazy<RwLock<RuleRegistry>> =
    Lazy::new(|| RwLock::new(RuleRegistry::with_builtins()));

/// Add or replace a rule in the process-wide registry.
///
/// Takes the registry's write lock, so it waits for in-flight calls to
/// [`validate`] and is visible to every call that starts afterwards.
pub fn register_rule<F>(name: impl Into<String>, predicate: F, template: impl Into<String>)
where
    F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
{
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, predicate, template);
}

/// Validate against the process-wide registry.
///
/// Holds the read lock for the whole call, so a concurrent [`register_rule`]
/// never changes the rules midway through one validation.
pub fn validate(values: &FieldValues, rules: &RuleSet) -> ValidationResult<()> {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    evaluate(&registry, values, rules)
}

/// Validate a serializable value against its declared rules using the
/// process-wide registry
pub fn validate_struct<T>(value: &T) -> ValidationResult<()>
where
    T: Serialize + ValidationRules,
{
    let values = struct_values(value);
    validate(&values, &T::validation_rules())
}

/// Snapshot of the process-wide registry
pub fn global_registry() -> RuleRegistry {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_absent_reports_only_required() {
        let rules = RuleSet::new().field("email", "email|required|max_chars:3");
        let errors = Validator::new().validate(&values(&[]), &rules).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("email"), Some("The email field is required."));
        assert_eq!(errors.get("email").unwrap().rule, "required");
    }

    #[test]
    fn test_required_present_but_empty_runs_all_rules() {
        let rules = RuleSet::new().field("name", "alpha|required");
        let errors = Validator::new()
            .validate(&values(&[("name", "")]), &rules)
            .unwrap_err();

        // alpha fails first, then required overwrites it
        assert_eq!(errors.message("name"), Some("The name field is required."));
    }

    #[test]
    fn test_optional_empty_field_is_skipped() {
        let rules = RuleSet::new().field("email", "email|max_chars:5");
        let validator = Validator::new();

        assert!(validator.validate(&values(&[]), &rules).is_ok());
        assert!(validator.validate(&values(&[("email", "")]), &rules).is_ok());
        assert!(validator
            .validate(&values(&[("email", "not-an-email")]), &rules)
            .is_err());
    }

    #[test]
    fn test_always_runs_rules_on_absent_field() {
        let rules = RuleSet::new().field("color", "always|in:red,green,blue");
        let errors = Validator::new().validate(&values(&[]), &rules).unwrap_err();

        // in's template has one placeholder but gets three params
        assert_eq!(errors.message("color"), Some("The color is invalid."));
    }

    #[test]
    fn test_last_failing_rule_wins() {
        let rules = RuleSet::new().field("code", "numeric|min_chars:5");
        let errors = Validator::new()
            .validate(&values(&[("code", "ab")]), &rules)
            .unwrap_err();

        assert_eq!(errors.message("code"), Some("The code must have more than 5 characters."));
        assert_eq!(errors.get("code").unwrap().params, vec!["5"]);
    }

    #[test]
    fn test_custom_rule_on_validator_instance() {
        let mut validator = Validator::new();
        validator.register("even", |ctx| ctx.value.parse::<i64>().is_ok_and(|n| n % 2 == 0), "The %s must be even.");

        let rules = RuleSet::new().field("count", "integer|even");
        assert!(validator.validate(&values(&[("count", "4")]), &rules).is_ok());

        let errors = validator
            .validate(&values(&[("count", "3")]), &rules)
            .unwrap_err();
        assert_eq!(errors.message("count"), Some("The count must be even."));

        // other validators are unaffected
        assert!(Validator::new().validate(&values(&[("count", "3")]), &rules).is_ok());
    }

    #[test]
    fn test_validate_struct_uses_declared_rules() {
        #[derive(Serialize)]
        struct Signup {
            username: String,
            age: Option<u8>,
        }

        impl ValidationRules for Signup {
            fn validation_rules() -> RuleSet {
                RuleSet::new()
                    .field("username", "required|alpha_dash")
                    .field("age", "integer|min_value:13")
            }
        }

        let validator = Validator::new();
        let ok = Signup {
            username: "ada_l".to_string(),
            age: None,
        };
        assert!(validator.validate_struct(&ok).is_ok());

        let young = Signup {
            username: "ada l".to_string(),
            age: Some(9),
        };
        let errors = validator.validate_struct(&young).unwrap_err();
        assert_eq!(errors.fields(), vec!["age", "username"]);
    }

    #[traced_test]
    #[test]
    fn test_unknown_rule_is_skipped_and_traced() {
        let rules = RuleSet::new().field("nickname", "always|no_such_rule");
        assert!(Validator::new().validate(&values(&[]), &rules).is_ok());
        assert!(logs_contain("Skipping unknown rule"));
    }

    #[traced_test]
    #[test]
    fn test_template_mismatch_warns() {
        let rules = RuleSet::new().field("size", "in:s,m,l");
        let result = Validator::new().validate(&values(&[("size", "xl")]), &rules);
        assert!(result.is_err());
        assert!(logs_contain("placeholder count mismatch"));
    }
}
