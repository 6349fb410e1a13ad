//! Rule registry: rule name to predicate and message template
//!
//! A [`RuleRegistry`] is a flat table. Registering a name that already exists
//! replaces both its predicate and its template. Templates use `%s`
//! placeholders, one for the field name followed by one per rule parameter,
//! and `%%` for a literal percent sign;
//! a template whose placeholder count does not match is only detected when a
//! message is built, and then degrades to a generic message.

use crate::error::ValidationError;
use crate::rule::ParsedRule;
use crate::rules::FieldValues;
use crate::validators;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Everything a predicate may inspect while checking one rule token
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Name of the field being validated
    pub field: &'a str,
    /// Submitted value, or `""` when the field is absent
    pub value: &'a str,
    /// All submitted values, for cross-field rules
    pub values: &'a FieldValues,
    /// Parameters declared after the rule name
    pub params: &'a [String],
}

impl<'a> RuleContext<'a> {
    pub fn new(
        field: &'a str,
        value: &'a str,
        values: &'a FieldValues,
        params: &'a [String],
    ) -> Self {
        Self {
            field,
            value,
            values,
            params,
        }
    }

    /// The parameter, when exactly one was declared
    pub fn single_param(&self) -> Option<&'a str> {
        match self.params {
            [param] => Some(param.as_str()),
            _ => None,
        }
    }

    /// The two parameters, when exactly two were declared
    pub fn param_pair(&self) -> Option<(&'a String, &'a String)> {
        match self.params {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Value submitted for another field
    pub fn other_value(&self, field: &str) -> Option<&'a str> {
        self.values.get(field).map(String::as_str)
    }

    /// Same field and value, different parameters
    pub fn with_params<'b>(&'b self, params: &'b [String]) -> RuleContext<'b> {
        RuleContext {
            field: self.field,
            value: self.value,
            values: self.values,
            params,
        }
    }
}

/// Pass/fail decision for one rule token against one field value.
///
/// Implemented for every `Fn(&RuleContext) -> bool`, so plain functions and
/// closures can be registered directly.
pub trait RulePredicate: Send + Sync {
    fn check(&self, ctx: &RuleContext<'_>) -> bool;
}

impl<F> RulePredicate for F
where
    F: Fn(&RuleContext<'_>) -> bool + Send + Sync,
{
    fn check(&self, ctx: &RuleContext<'_>) -> bool {
        self(ctx)
    }
}

/// A registered rule: its predicate and message template
#[derive(Clone)]
pub struct RuleEntry {
    predicate: Arc<dyn RulePredicate>,
    template: String,
}

impl RuleEntry {
    pub fn new<P>(predicate: P, template: impl Into<String>) -> Self
    where
        P: RulePredicate + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            template: template.into(),
        }
    }

    pub fn predicate(&self) -> &dyn RulePredicate {
        self.predicate.as_ref()
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl fmt::Debug for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEntry")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

/// Table of named rules consulted by the evaluation engine
#[derive(Clone, Default)]
pub struct RuleRegistry {
    entries: HashMap<String, RuleEntry>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in rule
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        validators::register_builtins(&mut registry);
        registry
    }

    /// Insert a rule, replacing any rule already registered under `name`
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F, template: impl Into<String>)
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.register_predicate(name, predicate, template);
    }

    /// Insert a rule backed by any [`RulePredicate`] implementation
    pub fn register_predicate<P>(
        &mut self,
        name: impl Into<String>,
        predicate: P,
        template: impl Into<String>,
    ) where
        P: RulePredicate + 'static,
    {
        let name = name.into();
        let replaced = self
            .entries
            .insert(name.clone(), RuleEntry::new(predicate, template))
            .is_some();

        if replaced {
            tracing::debug!(rule = %name, "Replaced validation rule");
        } else {
            tracing::trace!(rule = %name, "Registered validation rule");
        }
    }

    /// Remove a rule, returning whether it was registered
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Look up the predicate registered under `name`
    pub fn lookup(&self, name: &str) -> Option<&dyn RulePredicate> {
        self.entries.get(name).map(RuleEntry::predicate)
    }

    /// Look up the message template registered under `name`
    pub fn template(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(RuleEntry::template)
    }

    pub fn get(&self, name: &str) -> Option<&RuleEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the message for `field` failing `rule`.
    ///
    /// Falls back to `The <field> is invalid.` when the rule has no template
    /// or the template's placeholder count is not `1 + params.len()`.
    pub fn message(&self, field: &str, rule: &ParsedRule) -> String {
        let filled = self
            .template(&rule.name)
            .and_then(|template| fill_template(template, field, &rule.params));

        match filled {
            Some(message) => message,
            None => {
                tracing::warn!(
                    rule = %rule.name,
                    field = %field,
                    params = rule.params.len(),
                    "Message template missing or placeholder count mismatch, using fallback"
                );
                fallback_message(field)
            }
        }
    }

    /// Build the error recorded for `field` failing `rule`
    pub fn error(&self, field: &str, rule: &ParsedRule) -> ValidationError {
        ValidationError::with_rule(
            field,
            self.message(field, rule),
            rule.name.clone(),
            rule.params.clone(),
        )
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rule_count", &self.entries.len())
            .field("rules", &self.names())
            .finish()
    }
}

/// Generic message used when a rule's template cannot be applied
pub fn fallback_message(field: &str) -> String {
    format!("The {} is invalid.", field)
}

/// Substitute the field name, then each parameter, into the template's `%s`
/// placeholders. `%%` renders as a literal `%`; any other `%` is kept as is.
/// Returns `None` when the placeholder count does not match.
pub fn fill_template(template: &str, field: &str, params: &[String]) -> Option<String> {
    let mut args = std::iter::once(field).chain(params.iter().map(String::as_str));
    let mut message = String::with_capacity(template.len() + field.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            message.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                message.push_str(args.next()?);
            }
            Some('%') => {
                chars.next();
                message.push('%');
            }
            _ => message.push('%'),
        }
    }

    if args.next().is_some() {
        return None;
    }
    Some(message)
}
