//! Validation error types and handling

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Validation failure recorded for a single field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Name of the rule that rejected the value
    pub rule: String,
    /// Parameters the rule was declared with
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
}

impl ValidationError {
    /// Create a new validation error not tied to a named rule
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: "invalid".to_string(),
            params: Vec::new(),
        }
    }

    /// Create a validation error for a specific rule and its parameters
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
        params: Vec<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: rule.into(),
            params,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collection of validation errors, holding at most one error per field.
///
/// Inserting an error for a field that already has one replaces it, so the
/// last failing rule of a field decides the reported message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    /// Map of field names to their validation error
    pub errors: HashMap<String, ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Record an error, returning the one it replaced for the same field
    pub fn insert(&mut self, error: ValidationError) -> Option<ValidationError> {
        self.errors.insert(error.field.clone(), error)
    }

    /// Record a plain message for a field
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.insert(ValidationError::new(field, message));
    }

    /// Check if there are any validation errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get the error recorded for a field
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    /// Get the message recorded for a field
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|error| error.message.as_str())
    }

    /// Check if a specific field has an error
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Names of the fields that failed, sorted
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }

    /// Field name to message mapping, suitable for an API response body
    pub fn messages(&self) -> HashMap<String, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.clone(), error.message.clone()))
            .collect()
    }

    /// Consume the collection into its field name to message mapping
    pub fn into_messages(self) -> HashMap<String, String> {
        self.errors
            .into_iter()
            .map(|(field, error)| (field, error.message))
            .collect()
    }

    /// Merge another collection into this one; its errors win on conflicts
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Iterate over the recorded errors
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "fields": self.messages()
            }
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.errors.len())?;
            for field in self.fields() {
                write!(f, "\n  {}: {}", field, self.errors[field].message)?;
            }
            Ok(())
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.insert(error);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new("email", "Invalid email format");
        assert_eq!(error.field, "email");
        assert_eq!(error.message, "Invalid email format");
        assert_eq!(error.rule, "invalid");
        assert!(error.params.is_empty());
    }

    #[test]
    fn test_later_error_replaces_earlier_one() {
        let mut errors = ValidationErrors::new();
        errors.add_error("email", "Invalid format");
        errors.add_error("age", "Must be positive");
        let replaced = errors.insert(ValidationError::with_rule(
            "email",
            "Already exists",
            "unique",
            vec!["users".to_string()],
        ));

        assert_eq!(replaced.map(|e| e.message), Some("Invalid format".to_string()));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message("email"), Some("Already exists"));
        assert_eq!(errors.get("email").unwrap().rule, "unique");
        assert!(!errors.has_field_error("name"));
    }

    #[test]
    fn test_merge_prefers_incoming_errors() {
        let mut first = ValidationErrors::new();
        first.add_error("field1", "Error 1");

        let mut second = ValidationErrors::new();
        second.add_error("field2", "Error 2");
        second.add_error("field1", "Error 3");

        first.merge(second);

        assert_eq!(first.fields(), vec!["field1", "field2"]);
        assert_eq!(first.message("field1"), Some("Error 3"));
    }

    #[test]
    fn test_json_and_display_output() {
        let mut errors = ValidationErrors::new();
        errors.add_error("name", "The name field is required.");

        let json = errors.to_json();
        assert_eq!(json["error"]["code"], "validation_failed");
        assert_eq!(json["error"]["fields"]["name"], "The name field is required.");

        let rendered = errors.to_string();
        assert!(rendered.starts_with("Validation failed for 1 field(s):"));
        assert!(rendered.contains("name: The name field is required."));
    }
}
