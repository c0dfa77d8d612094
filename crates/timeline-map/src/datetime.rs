//! Calendar date parsing and display formatting.
//!
//! Host cells arrive as strings in ISO `YYYY-MM-DD` or ISO date-time form.
//! Display output is `DD/MM/YYYY` with zero-padded day and month. Values
//! that fail to parse surface as an explicit sentinel rather than aborting
//! the render.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Display sentinel for non-empty values that fail date parsing.
pub const INVALID_DATE_DISPLAY: &str = "Invalid Date";

/// Parses a raw cell value as a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times (`Z` or numeric offset), and
/// offset-free ISO date-times with or without seconds. Returns `None` for
/// empty or unparseable input.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Formats a parsed date as `DD/MM/YYYY`.
pub fn display_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Display form of a raw date cell.
///
/// Empty input stays empty (the role simply carried no value); non-empty
/// input that does not parse yields [`INVALID_DATE_DISPLAY`].
pub fn format_display_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_calendar_date(trimmed) {
        Some(date) => display_date(date),
        None => INVALID_DATE_DISPLAY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        assert_eq!(
            parse_calendar_date("2024-03-05"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }

    #[test]
    fn parses_datetime_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_calendar_date("2024-03-05T10:30"), expected);
        assert_eq!(parse_calendar_date("2024-03-05T10:30:15"), expected);
        assert_eq!(parse_calendar_date("2024-03-05T10:30:15.250Z"), expected);
        assert_eq!(parse_calendar_date("2024-03-05T10:30:15+02:00"), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date("2024-13-40"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn formats_day_month_year() {
        assert_eq!(format_display_date("2024-03-05"), "05/03/2024");
        assert_eq!(format_display_date("1999-12-31"), "31/12/1999");
    }

    #[test]
    fn invalid_input_surfaces_sentinel() {
        assert_eq!(format_display_date("not a date"), INVALID_DATE_DISPLAY);
        assert_eq!(format_display_date(""), "");
    }
}
