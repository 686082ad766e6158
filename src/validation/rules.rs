//! Validator primitives.
//!
//! Each rule checks one constraint against one value and returns `None` on
//! success or `Some(message)` on failure. Rules are pure and never panic; an
//! empty input passes every rule except [`required`]/[`provided`], so that
//! "required" and "format" failures never stack on the same field.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;
use time::{Date, OffsetDateTime, macros::format_description};

/// Simplified `local@domain.tld` shape; full RFC 5322 matching is the
/// backend's job.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Old-format Vietnamese ID card: exactly 9 digits.
static ID_CARD_OLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9}$").unwrap());
/// New-format citizen ID: exactly 12 digits.
static ID_CARD_NEW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{12}$").unwrap());
/// Zero-prefixed 12-digit variant. Subsumed by the 12-digit pattern above;
/// kept as a distinct pattern to match the accepted shapes exactly.
static ID_CARD_ZERO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0\d{11}$").unwrap());

/// Fails when the trimmed value is empty.
pub fn required(value: &str, msg: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(msg.to_owned())
    } else {
        None
    }
}

/// Fails when an optional (typically numeric) field was not supplied.
pub fn provided<T>(value: &Option<T>, msg: &str) -> Option<String> {
    if value.is_none() {
        Some(msg.to_owned())
    } else {
        None
    }
}

/// Fails when `value` parses to a date strictly after today.
///
/// Empty input passes. A non-empty value that does not parse as
/// `YYYY-MM-DD` cannot be shown to be in the past and fails with `msg`.
pub fn not_future_date(value: &str, msg: &str) -> Option<String> {
    not_future_date_on(value, today(), msg)
}

/// [`not_future_date`] against an explicit `today`, for deterministic tests.
pub fn not_future_date_on(value: &str, today: Date, msg: &str) -> Option<String> {
    if value.trim().is_empty() {
        return None;
    }
    match parse_date(value) {
        Some(date) if date <= today => None,
        _ => Some(msg.to_owned()),
    }
}

/// Fails when `later` is strictly before `earlier`. Equal dates pass.
///
/// Passes when either side is empty; fails with `msg` when a non-empty side
/// does not parse.
pub fn date_order(later: &str, earlier: &str, msg: &str) -> Option<String> {
    if later.trim().is_empty() || earlier.trim().is_empty() {
        return None;
    }
    match (parse_date(later), parse_date(earlier)) {
        (Some(later), Some(earlier)) if later >= earlier => None,
        _ => Some(msg.to_owned()),
    }
}

/// Fails when `value` is negative.
pub fn non_negative<T: PartialOrd + Default>(value: T, msg: &str) -> Option<String> {
    if value < T::default() {
        Some(msg.to_owned())
    } else {
        None
    }
}

/// Fails when `value` is zero or negative.
pub fn positive<T: PartialOrd + Default>(value: T, msg: &str) -> Option<String> {
    if value <= T::default() {
        Some(msg.to_owned())
    } else {
        None
    }
}

/// Fails when `value` lies outside `[min, max]` (bounds inclusive).
///
/// `{min}` and `{max}` placeholders in `msg` are substituted with the bounds.
pub fn in_range<T: PartialOrd + Display>(value: T, min: T, max: T, msg: &str) -> Option<String> {
    if value < min || value > max {
        Some(
            msg.replace("{min}", &min.to_string())
                .replace("{max}", &max.to_string()),
        )
    } else {
        None
    }
}

/// Fails when the value is longer than `max` characters. Empty input passes.
///
/// The `{max}` placeholder in `msg` is substituted with the limit.
pub fn max_length(value: &str, max: usize, msg: &str) -> Option<String> {
    if !value.is_empty() && value.chars().count() > max {
        Some(msg.replace("{max}", &max.to_string()))
    } else {
        None
    }
}

/// Fails when the birth date implies an age below `min_age` years.
///
/// Age is calendar-aware: it only counts a year once the birthday has been
/// reached. Empty input passes; an unparseable date fails with `msg`.
pub fn minimum_age(birth: &str, min_age: i32, msg: &str) -> Option<String> {
    minimum_age_on(birth, today(), min_age, msg)
}

/// [`minimum_age`] against an explicit `today`, for deterministic tests.
pub fn minimum_age_on(birth: &str, today: Date, min_age: i32, msg: &str) -> Option<String> {
    if birth.trim().is_empty() {
        return None;
    }
    let Some(birth) = parse_date(birth) else {
        return Some(msg.to_owned());
    };
    let mut age = today.year() - birth.year();
    if (today.month() as u8, today.day()) < (birth.month() as u8, birth.day()) {
        age -= 1;
    }
    if age < min_age { Some(msg.to_owned()) } else { None }
}

/// Fails unless the value matches one of the accepted Vietnamese ID card
/// shapes: 9 digits (old format), 12 digits (citizen ID), or a leading zero
/// followed by 11 digits. Empty input passes.
pub fn id_card(value: &str, msg: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if ID_CARD_OLD_RE.is_match(value)
        || ID_CARD_NEW_RE.is_match(value)
        || ID_CARD_ZERO_RE.is_match(value)
    {
        None
    } else {
        Some(msg.to_owned())
    }
}

/// Fails unless the value looks like an email address. Empty input passes.
pub fn email(value: &str, msg: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || EMAIL_RE.is_match(value) {
        None
    } else {
        Some(msg.to_owned())
    }
}

/// Fails unless the trimmed value is one of `allowed`. Empty input passes.
pub fn one_of(value: &str, allowed: &[&str], msg: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || allowed.contains(&value) {
        None
    } else {
        Some(msg.to_owned())
    }
}

/// Current local calendar date, falling back to UTC when the local offset
/// cannot be determined (multithreaded Unix processes).
pub(crate) fn today() -> Date {
    OffsetDateTime::now_local()
        .map(|now| now.date())
        .unwrap_or_else(|_| OffsetDateTime::now_utc().date())
}

/// Parses a `YYYY-MM-DD` date string.
pub(crate) fn parse_date(value: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), format).ok()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        assert!(required("", "bat buoc").is_some());
        assert!(required("   ", "bat buoc").is_some());
        assert!(required("x", "bat buoc").is_none());
    }

    #[test]
    fn provided_rejects_none() {
        assert!(provided(&None::<f64>, "bat buoc").is_some());
        assert!(provided(&Some(0.0), "bat buoc").is_none());
    }

    #[test]
    fn not_future_date_boundary_is_today() {
        let today = date!(2025 - 06 - 15);
        assert!(not_future_date_on("", today, "future").is_none());
        assert!(not_future_date_on("2025-06-15", today, "future").is_none());
        assert!(not_future_date_on("2025-06-14", today, "future").is_none());
        assert!(not_future_date_on("2025-06-16", today, "future").is_some());
    }

    #[test]
    fn not_future_date_rejects_garbage() {
        let today = date!(2025 - 06 - 15);
        assert!(not_future_date_on("not-a-date", today, "future").is_some());
    }

    #[test]
    fn date_order_allows_equal_dates() {
        assert!(date_order("2024-01-01", "2024-01-01", "order").is_none());
        assert!(date_order("2024-01-02", "2024-01-01", "order").is_none());
        assert!(date_order("2023-12-31", "2024-01-01", "order").is_some());
    }

    #[test]
    fn date_order_skips_missing_sides() {
        assert!(date_order("", "2024-01-01", "order").is_none());
        assert!(date_order("2024-01-01", "", "order").is_none());
        assert!(date_order("garbage", "2024-01-01", "order").is_some());
    }

    #[test]
    fn non_negative_and_positive_bounds() {
        assert!(non_negative(0, "am").is_none());
        assert!(non_negative(-1, "am").is_some());
        assert!(positive(0.0, "phai duong").is_some());
        assert!(positive(0.1, "phai duong").is_none());
    }

    #[test]
    fn in_range_bounds_are_inclusive() {
        assert!(in_range(0, 0, 1000, "range").is_none());
        assert!(in_range(1000, 0, 1000, "range").is_none());
        assert!(in_range(-1, 0, 1000, "range").is_some());
        assert!(in_range(1001, 0, 1000, "range").is_some());
    }

    #[test]
    fn in_range_substitutes_bounds_into_message() {
        let msg = in_range(5, 10, 20, "tu {min} den {max}").unwrap();
        assert_eq!(msg, "tu 10 den 20");
    }

    #[test]
    fn max_length_counts_characters() {
        assert!(max_length("", 3, "max").is_none());
        assert!(max_length("abc", 3, "max").is_none());
        assert!(max_length("abcd", 3, "max").is_some());
        // multi-byte characters count once
        assert!(max_length("chuồng", 6, "max").is_none());
        assert_eq!(max_length("abcd", 3, "toi da {max}").unwrap(), "toi da 3");
    }

    #[test]
    fn minimum_age_boundary_is_the_birthday() {
        let today = date!(2025 - 06 - 15);
        assert!(minimum_age_on("2007-06-15", today, 18, "tuoi").is_none());
        assert!(minimum_age_on("2007-06-16", today, 18, "tuoi").is_some());
        assert!(minimum_age_on("1990-01-01", today, 18, "tuoi").is_none());
        assert!(minimum_age_on("", today, 18, "tuoi").is_none());
    }

    #[test]
    fn minimum_age_decrements_before_birthday() {
        // birthday later this year: still 17
        let today = date!(2025 - 03 - 01);
        assert!(minimum_age_on("2007-06-15", today, 18, "tuoi").is_some());
    }

    #[test]
    fn id_card_accepts_all_three_shapes() {
        assert!(id_card("123456789", "cmnd").is_none());
        assert!(id_card("123456789012", "cmnd").is_none());
        // matches both the 12-digit and the zero-prefixed pattern
        assert!(id_card("012345678901", "cmnd").is_none());
    }

    #[test]
    fn id_card_rejects_other_shapes() {
        assert!(id_card("12345", "cmnd").is_some());
        assert!(id_card("1234567890", "cmnd").is_some());
        assert!(id_card("abcdefghi", "cmnd").is_some());
        assert!(id_card("12345678901a", "cmnd").is_some());
        assert!(id_card("", "cmnd").is_none());
    }

    #[test]
    fn email_checks_basic_shape() {
        assert!(email("nhanvien@trangtrai.vn", "email").is_none());
        assert!(email("not-an-email", "email").is_some());
        assert!(email("a b@c.d", "email").is_some());
        assert!(email("", "email").is_none());
    }

    #[test]
    fn one_of_checks_membership() {
        let allowed = ["ACTIVE", "SOLD"];
        assert!(one_of("SOLD", &allowed, "trang thai").is_none());
        assert!(one_of("EXPORTED", &allowed, "trang thai").is_some());
        assert!(one_of("", &allowed, "trang thai").is_none());
    }

    #[test]
    fn rules_are_idempotent() {
        let today = date!(2025 - 06 - 15);
        assert_eq!(
            not_future_date_on("2025-07-01", today, "future"),
            not_future_date_on("2025-07-01", today, "future")
        );
        assert_eq!(id_card("12345", "cmnd"), id_card("12345", "cmnd"));
    }
}
