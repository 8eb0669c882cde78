//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Display value for dates that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a front-matter date string in various formats.
///
/// Values without an explicit offset are read as UTC.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Long-form en-US date, e.g. "January 5, 2024"
pub fn long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a raw date string for display, or `Invalid Date`
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|dt| long_date(&dt))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// RFC 822 date in GMT, e.g. "Thu, 01 Feb 2024 00:00:00 GMT"
pub fn rfc822(date: &DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// W3C date used by sitemaps
pub fn w3c_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(midnight));
        assert_eq!(parse_date("2024/01/15"), Some(midnight));

        let morning = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(parse_date("2024-01-15 10:30:00"), Some(morning));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(morning));
        assert_eq!(parse_date("2024-01-15T12:30:00+02:00"), Some(morning));
        assert_eq!(parse_date("2024-01-15T10:30:00Z"), Some(morning));
    }

    #[test]
    fn test_parse_invalid_date() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_date("2023-12-31T23:00:00Z"), "December 31, 2023");
        assert_eq!(format_date("not a date"), INVALID_DATE);
    }

    #[test]
    fn test_rfc822() {
        let date = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(rfc822(&date), "Thu, 01 Feb 2024 00:00:00 GMT");
        assert_eq!(w3c_date(&date), "2024-02-01");
    }
}
