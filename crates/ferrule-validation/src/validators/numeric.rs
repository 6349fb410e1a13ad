//! Numeric validators
//!
//! Values and bounds are parsed at validation time. Anything that does not
//! parse fails the rule.

use crate::registry::RuleContext;

fn number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn compare(ctx: &RuleContext<'_>, accept: impl Fn(f64, f64) -> bool) -> bool {
    match (number(ctx.value), ctx.single_param().and_then(number)) {
        (Some(value), Some(bound)) => accept(value, bound),
        _ => false,
    }
}

/// Base-10 signed 64-bit integer
pub fn integer(ctx: &RuleContext<'_>) -> bool {
    ctx.value.parse::<i64>().is_ok()
}

/// Any value that parses as a 64-bit float, `NaN` and `inf` included
pub fn numeric(ctx: &RuleContext<'_>) -> bool {
    ctx.value.parse::<f64>().is_ok()
}

/// `value:N`: numerically equal to N
pub fn value(ctx: &RuleContext<'_>) -> bool {
    compare(ctx, |value, bound| value == bound)
}

/// `min_value:N`
pub fn min_value(ctx: &RuleContext<'_>) -> bool {
    compare(ctx, |value, bound| value >= bound)
}

/// `max_value:N`
pub fn max_value(ctx: &RuleContext<'_>) -> bool {
    compare(ctx, |value, bound| value <= bound)
}

/// `value_between:MIN,MAX`, inclusive
pub fn value_between(ctx: &RuleContext<'_>) -> bool {
    let Some((min, max)) = ctx.param_pair() else {
        return false;
    };
    match (number(ctx.value), number(min), number(max)) {
        (Some(value), Some(min), Some(max)) => min <= value && value <= max,
        _ => false,
    }
}
