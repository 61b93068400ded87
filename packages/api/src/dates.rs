//! Date handling for values the backend stores as strings.
//!
//! Date inputs post `YYYY-MM-DD`; the backend may hand them back as full ISO
//! timestamps (`2024-04-15T00:00:00.000Z`). Both parse to the calendar date as
//! written. Anything else is treated as "no date" and renders empty.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime};

use crate::models::TimeSpan;

/// Parse a stored date string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Zero-based month (January = 0) of a stored date.
pub fn month_index(value: &str) -> Option<u8> {
    parse_date(value).map(|d| d.month0() as u8)
}

/// `15 April 2024`.
pub fn format_long(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_default()
}

/// `15/04/2024`.
pub fn format_short(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn to_input_value(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Add a duration such as `10 weeks` to a date.
///
/// The amount is rounded to whole units. Zero, negative, non-finite amounts
/// and unknown units yield `None`.
pub fn add_span(date: NaiveDate, span: &TimeSpan) -> Option<NaiveDate> {
    if !span.duration.is_finite() {
        return None;
    }
    let amount = span.duration.round();
    if amount < 1.0 {
        return None;
    }
    let amount = amount as u64;
    match span.unit.trim().to_ascii_lowercase().as_str() {
        "day" | "days" => date.checked_add_days(Days::new(amount)),
        "week" | "weeks" => date.checked_add_days(Days::new(amount.checked_mul(7)?)),
        "month" | "months" => date.checked_add_months(Months::new(u32::try_from(amount).ok()?)),
        "year" | "years" => {
            let months = u32::try_from(amount.checked_mul(12)?).ok()?;
            date.checked_add_months(Months::new(months))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(duration: f64, unit: &str) -> TimeSpan {
        TimeSpan {
            duration,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_parse_input_and_iso_forms() {
        assert_eq!(parse_date("2024-04-15"), Some(ymd(2024, 4, 15)));
        assert_eq!(parse_date("2024-04-15T00:00:00.000Z"), Some(ymd(2024, 4, 15)));
        assert_eq!(parse_date("2024-04-15T08:30:00+02:00"), Some(ymd(2024, 4, 15)));
        assert_eq!(parse_date("2024-04-15T08:30:00"), Some(ymd(2024, 4, 15)));
        assert_eq!(parse_date(" 2024-04-15 "), Some(ymd(2024, 4, 15)));
    }

    #[test]
    fn test_unparsable_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("someday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(month_index("nope"), None);
    }

    #[test]
    fn test_month_index_is_zero_based() {
        assert_eq!(month_index("2024-01-31"), Some(0));
        assert_eq!(month_index("2024-04-01"), Some(3));
        assert_eq!(month_index("2024-12-25T12:00:00Z"), Some(11));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_long("2024-04-05"), "5 April 2024");
        assert_eq!(format_short("2024-04-05"), "05/04/2024");
        assert_eq!(to_input_value("2024-04-05T00:00:00.000Z"), "2024-04-05");
        assert_eq!(format_long(""), "");
    }

    #[test]
    fn test_add_span_units() {
        let start = ymd(2024, 3, 1);
        assert_eq!(add_span(start, &span(10.0, "days")), Some(ymd(2024, 3, 11)));
        assert_eq!(add_span(start, &span(2.0, "weeks")), Some(ymd(2024, 3, 15)));
        assert_eq!(add_span(start, &span(3.0, "months")), Some(ymd(2024, 6, 1)));
        assert_eq!(add_span(start, &span(1.0, "years")), Some(ymd(2025, 3, 1)));
        assert_eq!(add_span(start, &span(1.6, "Weeks")), Some(ymd(2024, 3, 15)));
    }

    #[test]
    fn test_add_span_rejects_empty_durations() {
        let start = ymd(2024, 3, 1);
        assert_eq!(add_span(start, &span(0.0, "days")), None);
        assert_eq!(add_span(start, &span(-4.0, "days")), None);
        assert_eq!(add_span(start, &span(f64::NAN, "days")), None);
        assert_eq!(add_span(start, &span(5.0, "fortnights")), None);
    }
}
