//! Rules that accept a fixed set of literal values

use crate::registry::RuleContext;

const ACCEPTED_VALUES: &[&str] = &["1", "true", "yes", "on"];

const BOOLEAN_LITERALS: &[&str] = &[
    "1", "t", "T", "TRUE", "true", "True", "0", "f", "F", "FALSE", "false", "False",
];

/// Passes for the affirmative values a checkbox or terms field may submit
pub fn accepted(ctx: &RuleContext<'_>) -> bool {
    ACCEPTED_VALUES.contains(&ctx.value)
}

/// Passes for any boolean literal, true or false
pub fn boolean(ctx: &RuleContext<'_>) -> bool {
    BOOLEAN_LITERALS.contains(&ctx.value)
}

/// `in:a,b,c`: the value equals one of the parameters
pub fn one_of(ctx: &RuleContext<'_>) -> bool {
    ctx.params.iter().any(|allowed| allowed == ctx.value)
}

/// `not_in:a,b,c`: the value equals none of the parameters
pub fn not_one_of(ctx: &RuleContext<'_>) -> bool {
    !one_of(ctx)
}
