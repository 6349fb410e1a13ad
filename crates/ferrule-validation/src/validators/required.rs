//! Required field validator

use crate::registry::RuleContext;

/// Passes when the value is non-empty. Whitespace counts as content.
pub fn required(ctx: &RuleContext<'_>) -> bool {
    !ctx.value.is_empty()
}
