//! Length validators
//!
//! Lengths count Unicode scalar values, not bytes, so `"héllo"` has five
//! characters and passes `max_chars:5` even though it is six bytes long.
//! Bounds are inclusive and parsed exactly as written; a missing, padded or
//! non-integer bound fails the rule.

use crate::registry::RuleContext;
use std::slice;

fn char_count(value: &str) -> i64 {
    value.chars().count() as i64
}

fn bound(param: &str) -> Option<i64> {
    param.parse().ok()
}

fn single_bound(ctx: &RuleContext<'_>) -> Option<i64> {
    ctx.single_param().and_then(bound)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// `chars:N`: exactly N characters
pub fn chars(ctx: &RuleContext<'_>) -> bool {
    single_bound(ctx).is_some_and(|n| char_count(ctx.value) == n)
}

/// `min_chars:N`: at least N characters, counted as Unicode scalar values
pub fn min_chars(ctx: &RuleContext<'_>) -> bool {
    single_bound(ctx).is_some_and(|n| char_count(ctx.value) >= n)
}

/// `max_chars:N`: at most N characters, counted as Unicode scalar values
pub fn max_chars(ctx: &RuleContext<'_>) -> bool {
    single_bound(ctx).is_some_and(|n| char_count(ctx.value) <= n)
}

/// `chars_between:MIN,MAX`
pub fn chars_between(ctx: &RuleContext<'_>) -> bool {
    let Some((min, max)) = ctx.param_pair() else {
        return false;
    };
    min_chars(&ctx.with_params(slice::from_ref(min)))
        && max_chars(&ctx.with_params(slice::from_ref(max)))
}

/// `digits:N`: exactly N ASCII digits
pub fn digits(ctx: &RuleContext<'_>) -> bool {
    is_digits(ctx.value) && chars(ctx)
}

/// `min_digits:N`
pub fn min_digits(ctx: &RuleContext<'_>) -> bool {
    is_digits(ctx.value) && min_chars(ctx)
}

/// `max_digits:N`
pub fn max_digits(ctx: &RuleContext<'_>) -> bool {
    is_digits(ctx.value) && max_chars(ctx)
}

/// `digits_between:MIN,MAX`
pub fn digits_between(ctx: &RuleContext<'_>) -> bool {
    is_digits(ctx.value) && chars_between(ctx)
}
