//! Built-in validation rules
//!
//! Every built-in rule is a plain function over a [`RuleContext`]. Rules that
//! expect parameters check the parameter count themselves and fail when it is
//! wrong; nothing here panics on malformed input.

pub mod choice;
pub mod date;
pub mod email;
pub mod fields;
pub mod length;
pub mod network;
pub mod numeric;
pub mod pattern;
pub mod required;

use crate::registry::{RuleContext, RuleRegistry};

type BuiltinRule = (&'static str, fn(&RuleContext<'_>) -> bool, &'static str);

/// Name, predicate and message template of every built-in rule
pub const BUILTIN_RULES: &[BuiltinRule] = &[
    ("accepted", choice::accepted, "The %s must be accepted."),
    ("active_url", network::active_url, "The %s is not a valid URL."),
    ("alpha", pattern::alpha, "The %s may only contain letters."),
    ("alpha_dash", pattern::alpha_dash, "The %s may only contain letters, numbers, and dashes."),
    ("alpha_num", pattern::alpha_num, "The %s may only contain letters and numbers."),
    ("boolean", choice::boolean, "The %s field must be true or false."),
    ("chars", length::chars, "The %s field must have %s characters."),
    ("chars_between", length::chars_between, "The %s field must have between %s and %s characters."),
    ("confirmed", fields::confirmed, "The %s confirmation does not match."),
    ("date", date::date, "The %s is not a valid date."),
    ("different", fields::different, "The %s and %s must be different."),
    ("digits", length::digits, "The %s must have %s digits."),
    ("digits_between", length::digits_between, "The %s must have between %s and %s digits."),
    ("email", email::email, "The %s must be a valid email address."),
    ("in", choice::one_of, "The selected %s is invalid."),
    ("integer", numeric::integer, "The %s must be an integer."),
    ("ip", network::ip, "The %s must be a valid IP address."),
    ("max_chars", length::max_chars, "The %s must have fewer than %s characters."),
    ("max_digits", length::max_digits, "The %s must have fewer than %s digits."),
    ("max_value", numeric::max_value, "The %s must be less than %s."),
    ("min_chars", length::min_chars, "The %s must have more than %s characters."),
    ("min_digits", length::min_digits, "The %s must have more than %s digits."),
    ("min_value", numeric::min_value, "The %s must be greater than %s."),
    ("not_in", choice::not_one_of, "The selected %s is invalid."),
    ("numeric", numeric::numeric, "The %s must be a number."),
    ("regex", pattern::regex, "The %s format is invalid."),
    ("required", required::required, "The %s field is required."),
    ("same", fields::same, "The %s and %s must match."),
    ("url", network::url, "The %s format is invalid."),
    ("value", numeric::value, "The %s must be %s."),
    ("value_between", numeric::value_between, "The %s must be between %s and %s."),
];

/// Register every built-in rule, replacing same-named entries
pub fn register_builtins(registry: &mut RuleRegistry) {
    for &(name, predicate, template) in BUILTIN_RULES {
        registry.register(name, predicate, template);
    }
}
