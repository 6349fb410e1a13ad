//! Cross-field comparison validators

use crate::registry::RuleContext;

const CONFIRMATION_SUFFIX: &str = "_confirmation";

/// `same:other`: equal to the value submitted for `other`.
///
/// Fails when `other` was not submitted.
pub fn same(ctx: &RuleContext<'_>) -> bool {
    ctx.single_param()
        .and_then(|other| ctx.other_value(other))
        .is_some_and(|other| other == ctx.value)
}

/// `different:other`: the negation of `same:other`
pub fn different(ctx: &RuleContext<'_>) -> bool {
    !same(ctx)
}

/// Equal to the value of `<field>_confirmation`, which must be present
pub fn confirmed(ctx: &RuleContext<'_>) -> bool {
    let confirmation = format!("{}{}", ctx.field, CONFIRMATION_SUFFIX);
    ctx.other_value(&confirmation)
        .is_some_and(|other| other == ctx.value)
}
