//! Passport age computation.
//!
//! Ages are whole calendar years (`current_year - passport_year`), not
//! day-precise. Future-dated passports produce negative ages, which are
//! passed through.

use chrono::{DateTime, Datelike as _, NaiveDate, NaiveDateTime};

/// Extracts the year from an ISO 8601 passport date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]`, RFC 3339 timestamps and
/// a bare `YYYY`. Returns `None` for anything else.
#[must_use]
pub fn parse_passport_year(s: &str) -> Option<i32> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.year());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.year());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.year());
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok();
    }
    None
}

/// Returns the passport age in whole years.
///
/// Falls back to `default_age` when the date is missing or unparseable.
#[must_use]
pub fn compute_passport_age(
    passport_date: Option<&str>,
    current_year: i32,
    default_age: i32,
) -> i32 {
    match passport_date.and_then(parse_passport_year) {
        Some(year) => current_year.saturating_sub(year),
        None => {
            log::trace!(
                "Using default passport age {default_age} for passport date {passport_date:?}"
            );
            default_age
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_only() {
        assert_eq!(parse_passport_year("2010-06-15"), Some(2010));
    }

    #[test]
    fn parses_datetime_with_and_without_fraction() {
        assert_eq!(parse_passport_year("2015-03-20T10:00:00"), Some(2015));
        assert_eq!(parse_passport_year("2015-03-20T10:00:00.250"), Some(2015));
    }

    #[test]
    fn parses_rfc3339() {
        assert_eq!(parse_passport_year("2019-08-25T00:00:00+05:00"), Some(2019));
        assert_eq!(parse_passport_year("2019-08-25T00:00:00Z"), Some(2019));
    }

    #[test]
    fn parses_bare_year() {
        assert_eq!(parse_passport_year("2021"), Some(2021));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_passport_year("not-a-date"), None);
        assert_eq!(parse_passport_year(""), None);
        assert_eq!(parse_passport_year("2020-13-45"), None);
    }

    #[test]
    fn age_from_date() {
        assert_eq!(compute_passport_age(Some("2016-09-10"), 2026, 3), 10);
    }

    #[test]
    fn missing_date_uses_default() {
        assert_eq!(compute_passport_age(None, 2026, 3), 3);
        assert_eq!(compute_passport_age(None, 2026, 5), 5);
    }

    #[test]
    fn unparseable_date_uses_default() {
        assert_eq!(compute_passport_age(Some("вчера"), 2026, 5), 5);
    }

    #[test]
    fn future_passport_is_not_clamped() {
        assert_eq!(compute_passport_age(Some("2028-01-01"), 2026, 3), -2);
    }

    #[test]
    fn extreme_years_saturate() {
        assert_eq!(compute_passport_age(Some("2020-01-01"), i32::MIN, 3), i32::MIN);
        assert_eq!(compute_passport_age(Some("2020"), i32::MAX, 3), i32::MAX - 2020);
    }
}
