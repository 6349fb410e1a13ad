//! Rule sets and field value sets

use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Submitted values keyed by field name. An absent key is distinct from a
/// key mapped to `""`.
pub type FieldValues = HashMap<String, String>;

/// Rule strings keyed by field name, e.g. `"email" => "required|email"`
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: HashMap<String, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Declare the rule string for a field, replacing any earlier declaration
    pub fn field(mut self, field: impl Into<String>, rules: impl Into<String>) -> Self {
        self.insert(field, rules);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, rules: impl Into<String>) -> Option<String> {
        self.rules.insert(field.into(), rules.into())
    }

    /// Rule string declared for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.rules.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(field, rules)| (field.as_str(), rules.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fields that have rules, sorted
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        fields.sort_unstable();
        fields
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for field in self.fields() {
            map.entry(&field, &self.rules[field]);
        }
        map.finish()
    }
}

impl From<HashMap<String, String>> for RuleSet {
    fn from(rules: HashMap<String, String>) -> Self {
        Self { rules }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RuleSet {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<F, R> FromIterator<(F, R)> for RuleSet
where
    F: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, R)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(field, rules)| (field.into(), rules.into()))
                .collect(),
        }
    }
}

impl IntoIterator for RuleSet {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

/// Types that declare the rules their fields must satisfy.
///
/// ```
/// use ferrule_validation::{RuleSet, ValidationRules};
///
/// struct SignupForm {
///     username: String,
///     password: String,
/// }
///
/// impl ValidationRules for SignupForm {
///     fn validation_rules() -> RuleSet {
///         RuleSet::new()
///             .field("username", "required|alpha_dash|max_chars:32")
///             .field("password", "required|min_chars:8|confirmed")
///     }
/// }
///
/// assert_eq!(SignupForm::validation_rules().len(), 2);
/// ```
pub trait ValidationRules {
    fn validation_rules() -> RuleSet;
}

/// Flatten any serializable struct or map into field values.
///
/// Top-level members are rendered to text: strings as-is, numbers and
/// booleans via their JSON spelling. `null`, arrays and nested objects are
/// left out, so an `Option::None` field counts as absent.
pub fn to_field_values<T>(value: &T) -> serde_json::Result<FieldValues>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::Object(object) => Ok(object_to_field_values(object)),
        other => Err(serde_json::Error::custom(format!(
            "expected an object with named fields, found {}",
            json_kind(&other)
        ))),
    }
}

/// Flatten a JSON object into field values, with the same rules as
/// [`to_field_values`]
pub fn object_to_field_values(object: Map<String, Value>) -> FieldValues {
    object
        .into_iter()
        .filter_map(|(field, value)| scalar_text(value).map(|text| (field, text)))
        .collect()
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
