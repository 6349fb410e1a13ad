//! Character class and regular expression validators

use crate::registry::RuleContext;
use crate::rule::PARAM_SEPARATOR;
use once_cell::sync::Lazy;
use regex::Regex;

static ALPHA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("alpha pattern is valid"));

static ALPHA_DASH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("alpha_dash pattern is valid"));

static ALPHA_NUM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alpha_num pattern is valid"));

/// ASCII letters only
pub fn alpha(ctx: &RuleContext<'_>) -> bool {
    ALPHA_REGEX.is_match(ctx.value)
}

/// ASCII letters, digits, dashes and underscores
pub fn alpha_dash(ctx: &RuleContext<'_>) -> bool {
    ALPHA_DASH_REGEX.is_match(ctx.value)
}

/// ASCII letters and digits
pub fn alpha_num(ctx: &RuleContext<'_>) -> bool {
    ALPHA_NUM_REGEX.is_match(ctx.value)
}

/// `regex:PATTERN`: the whole value must match the pattern.
///
/// The rule parser splits parameters on commas, so they are joined back
/// before compiling; `regex:^\d{2,4}$` keeps its quantifier. A pattern that
/// fails to compile rejects every value.
pub fn regex(ctx: &RuleContext<'_>) -> bool {
    if ctx.params.is_empty() {
        return false;
    }

    let pattern = ctx.params.join(PARAM_SEPARATOR.to_string().as_str());
    match Regex::new(&format!("^(?:{})$", pattern)) {
        Ok(re) => re.is_match(ctx.value),
        Err(err) => {
            tracing::debug!(pattern = %pattern, error = %err, "Invalid regex rule pattern");
            false
        }
    }
}
