//! Date validator
//!
//! Layouts are strftime format strings (`%Y-%m-%d`, `%d/%m/%Y %H.%M`). A
//! layout cannot contain `:` or `,` because the rule grammar reserves them.

use crate::registry::RuleContext;
use chrono::format::{self, Parsed, ParseErrorKind, StrftimeItems};

const LEAP_YEAR: i64 = 2000;

/// `date:LAYOUT`: the value parses under the layout.
///
/// Calendar fields that are present must form a real date, so
/// `2023-02-30` is rejected. Layouts that name only some fields, such as
/// `%H.%M` or `%Y-%m`, are accepted as long as what is present is valid.
pub fn date(ctx: &RuleContext<'_>) -> bool {
    let Some(layout) = ctx.single_param() else {
        return false;
    };

    let mut parsed = Parsed::new();
    if format::parse(&mut parsed, ctx.value, StrftimeItems::new(layout)).is_err() {
        return false;
    }

    match parsed.to_naive_date() {
        Ok(_) => true,
        Err(err) if err.kind() == ParseErrorKind::NotEnough => month_day_exists(parsed),
        Err(_) => false,
    }
}

/// A month and day parsed without a year must exist in some year, so they
/// are checked against a leap year.
fn month_day_exists(mut parsed: Parsed) -> bool {
    if parsed.month().is_none() || parsed.day().is_none() || parsed.year().is_some() {
        return true;
    }
    if parsed.set_year(LEAP_YEAR).is_err() {
        return false;
    }
    match parsed.to_naive_date() {
        Ok(_) => true,
        Err(err) => err.kind() == ParseErrorKind::NotEnough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::test_support::check;

    #[test]
    fn test_date_matches_layout() {
        assert!(check(date, "2024-02-29", &["%Y-%m-%d"]));
        assert!(check(date, "31/12/1999", &["%d/%m/%Y"]));
        assert!(!check(date, "12/31/1999", &["%d/%m/%Y"]));
        assert!(!check(date, "2024-02-29 extra", &["%Y-%m-%d"]));
    }

    #[test]
    fn test_date_rejects_impossible_days() {
        assert!(!check(date, "2023-02-29", &["%Y-%m-%d"]));
        assert!(!check(date, "2023-04-31", &["%Y-%m-%d"]));
        assert!(!check(date, "2023-13-01", &["%Y-%m-%d"]));
    }

    #[test]
    fn test_partial_layouts() {
        assert!(check(date, "2024-06", &["%Y-%m"]));
        assert!(check(date, "23.15", &["%H.%M"]));
        assert!(!check(date, "25.15", &["%H.%M"]));
    }

    #[test]
    fn test_month_and_day_without_year() {
        assert!(check(date, "02-29", &["%m-%d"]));
        assert!(check(date, "12-31", &["%m-%d"]));
        assert!(!check(date, "02-30", &["%m-%d"]));
        assert!(!check(date, "04-31", &["%m-%d"]));
    }

    #[test]
    fn test_date_without_layout_fails() {
        assert!(!check(date, "2024-01-01", &[]));
        assert!(!check(date, "2024-01-01", &["%Y", "%m"]));
    }
}
