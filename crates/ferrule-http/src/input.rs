//! Request input parsing
//!
//! JSON bodies are read on their own. Form bodies are merged with the URL
//! query string, and for a key that appears more than once the first body
//! value wins, then the first query value. Bodies of any other media type
//! are ignored and only the query string is read.

use crate::error::{InputError, InputResult};
use ferrule_validation::{object_to_field_values, validate, FieldValues, RuleSet, ValidationResult};
use http::{header, Method, Request};
use serde::de::Error as _;
use serde_json::Value;

const JSON_MEDIA_TYPE: &str = "application/json";
const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// How a request body is decoded, chosen from its `Content-Type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    /// Classify a `Content-Type` value by its media type, ignoring parameters
    /// such as `charset`. A missing content type is treated as a form.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let media_type = content_type
            .and_then(|value| value.split(';').next())
            .map(str::trim)
            .unwrap_or_default();

        if media_type.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
            BodyKind::Json
        } else if media_type.is_empty() || media_type.eq_ignore_ascii_case(FORM_MEDIA_TYPE) {
            BodyKind::Form
        } else {
            BodyKind::Other
        }
    }
}

/// Flat field values submitted with a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    values: FieldValues,
}

impl Input {
    /// Parse request input from its raw parts
    pub fn parse(content_type: Option<&str>, query: Option<&str>, body: &[u8]) -> InputResult<Self> {
        let kind = BodyKind::from_content_type(content_type);
        let values = match kind {
            BodyKind::Json => parse_json(body)?,
            BodyKind::Form => parse_form(body, query.unwrap_or_default())?,
            BodyKind::Other => parse_form(&[], query.unwrap_or_default())?,
        };

        tracing::debug!(body_kind = ?kind, fields = values.len(), "Parsed request input");

        Ok(Self { values })
    }

    /// Parse the input of an `http::Request`.
    ///
    /// Form bodies are only read for `POST`, `PUT` and `PATCH`; JSON bodies
    /// are read for any method. A non-ASCII `Content-Type` header counts as
    /// missing.
    pub fn from_request<B: AsRef<[u8]>>(request: &Request<B>) -> InputResult<Self> {
        let content_type = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        let body = match BodyKind::from_content_type(content_type) {
            BodyKind::Form if !method_has_form_body(request.method()) => &[][..],
            _ => request.body().as_ref(),
        };

        Self::parse(content_type, request.uri().query(), body)
    }

    /// Wrap values that were gathered elsewhere
    pub fn from_values(values: FieldValues) -> Self {
        Self { values }
    }

    /// Value for `key`, or `""` when it was not submitted
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Whether `key` was submitted with a non-empty value
    pub fn has(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    pub fn all(&self) -> &FieldValues {
        &self.values
    }

    pub fn into_values(self) -> FieldValues {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Validate the submitted values with the process-wide rule registry
    pub fn validate(&self, rules: &RuleSet) -> ValidationResult<()> {
        validate(&self.values, rules)
    }
}

impl From<Input> for FieldValues {
    fn from(input: Input) -> Self {
        input.into_values()
    }
}

fn method_has_form_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

fn parse_json(body: &[u8]) -> InputResult<FieldValues> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FieldValues::new());
    }

    let value: Value = serde_json::from_slice(body)?;
    match value {
        Value::Object(object) => Ok(object_to_field_values(object)),
        _ => Err(InputError::InvalidJson(serde_json::Error::custom(
            "request body must be a JSON object",
        ))),
    }
}

fn parse_form(body: &[u8], query: &str) -> InputResult<FieldValues> {
    let body = std::str::from_utf8(body)?;
    let body_pairs: Vec<(String, String)> = serde_urlencoded::from_str(body)?;
    let query_pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;

    let mut values = FieldValues::new();
    for (key, value) in body_pairs.into_iter().chain(query_pairs) {
        values.entry(key).or_insert(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_kind_from_content_type() {
        assert_eq!(BodyKind::from_content_type(Some("application/json")), BodyKind::Json);
        assert_eq!(
            BodyKind::from_content_type(Some("Application/JSON; charset=utf-8")),
            BodyKind::Json
        );
        assert_eq!(
            BodyKind::from_content_type(Some("application/x-www-form-urlencoded")),
            BodyKind::Form
        );
        assert_eq!(BodyKind::from_content_type(None), BodyKind::Form);
        assert_eq!(BodyKind::from_content_type(Some("text/plain")), BodyKind::Other);
    }

    #[test]
    fn test_json_scalars_become_text() {
        let body = br#"{"name":"Ada","age":36,"admin":false,"score":9.5,"tags":["x"],"boss":null,"meta":{}}"#;
        let input = Input::parse(Some("application/json"), Some("ignored=1"), body).unwrap();

        assert_eq!(input.get("name"), "Ada");
        assert_eq!(input.get("age"), "36");
        assert_eq!(input.get("admin"), "false");
        assert_eq!(input.get("score"), "9.5");
        assert!(!input.all().contains_key("tags"));
        assert!(!input.all().contains_key("boss"));
        assert!(!input.all().contains_key("meta"));
        assert!(!input.all().contains_key("ignored"));
    }

    #[test]
    fn test_json_must_be_an_object() {
        let err = Input::parse(Some("application/json"), None, b"[1,2]").unwrap_err();
        assert!(matches!(err, InputError::InvalidJson(_)));
        assert_eq!(err.error_code(), "invalid_json");

        let err = Input::parse(Some("application/json"), None, b"{\"a\":").unwrap_err();
        assert!(matches!(err, InputError::InvalidJson(_)));
    }

    #[test]
    fn test_empty_json_body_is_empty_input() {
        let input = Input::parse(Some("application/json"), None, b"  \n").unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn test_form_body_wins_over_query() {
        let input = Input::parse(
            Some("application/x-www-form-urlencoded"),
            Some("name=query&page=2&page=3"),
            b"name=body+value&name=second&email=a%40b.io",
        )
        .unwrap();

        assert_eq!(input.get("name"), "body value");
        assert_eq!(input.get("page"), "2");
        assert_eq!(input.get("email"), "a@b.io");
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_has_treats_empty_as_missing() {
        let input = Input::parse(None, Some("q=&lang=en"), b"").unwrap();
        assert!(input.has("lang"));
        assert!(!input.has("q"));
        assert!(input.all().contains_key("q"));
        assert_eq!(input.get("missing"), "");
    }

    #[test]
    fn test_other_media_types_read_query_only() {
        let input = Input::parse(Some("text/plain"), Some("a=1"), b"not=read").unwrap();
        assert_eq!(input.get("a"), "1");
        assert!(!input.all().contains_key("not"));
    }

    #[test]
    fn test_invalid_utf8_form_body() {
        let err = Input::parse(None, None, &[0x66, 0x3d, 0xff]).unwrap_err();
        assert!(matches!(err, InputError::InvalidUtf8(_)));
        assert_eq!(err.error_code(), "invalid_encoding");
    }
}
