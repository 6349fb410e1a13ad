//! Email address validator

use crate::registry::RuleContext;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Passes for a conventional `local@domain.tld` address.
///
/// This is a shape check, not RFC 5322: quoted local parts, IP literal
/// domains and internationalized addresses are rejected.
pub fn email(ctx: &RuleContext<'_>) -> bool {
    EMAIL_REGEX.is_match(ctx.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::test_support::check;

    #[test]
    fn test_valid_emails() {
        for value in [
            "user@example.com",
            "first.last@sub.example.org",
            "user+tag@example.co",
            "a_b%c@x-y.io",
        ] {
            assert!(check(email, value, &[]), "{} should be valid", value);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for value in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user name@example.com",
            "user@@example.com",
        ] {
            assert!(!check(email, value, &[]), "{} should be invalid", value);
        }
    }
}
