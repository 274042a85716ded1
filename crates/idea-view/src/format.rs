//! Text and Timestamp Formatting
//!
//! Helpers that turn idea fields into display strings.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{ViewError, ViewResult};

/// Date-times without an offset, read as local time like a browser does
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Locale-aware parsing and rendering of instants.
///
/// The browser crate parses and renders through the JS `Date`;
/// `ChronoRenderer` is the native stand-in.
pub trait DateRenderer {
    /// Full date and time, e.g. a table cell
    fn format_datetime(&self, at: DateTime<Utc>) -> String;
    /// Time of day only, e.g. the "updated at" stamp
    fn format_time(&self, at: DateTime<Utc>) -> String;

    /// Read a raw timestamp; `None` when it names no instant
    fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
        parse_timestamp(raw).ok()
    }
}

/// Renders in the host's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoRenderer;

impl DateRenderer for ChronoRenderer {
    fn format_datetime(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn format_time(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&Local).format("%H:%M:%S").to_string()
    }
}

/// Text for a cell; missing values become empty strings
pub fn safe_text(text: Option<&str>) -> String {
    text.unwrap_or_default().to_string()
}

/// Parse the timestamp shapes the backend is known to emit
pub fn parse_timestamp(raw: &str) -> ViewResult<DateTime<Utc>> {
    let s = raw.trim();
    let invalid = || ViewError::InvalidTimestamp(raw.to_string());

    if s.is_empty() {
        return Err(invalid());
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
        return Ok(at.with_timezone(&Utc));
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(s) {
        return Ok(at.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|at| at.with_timezone(&Utc))
                .ok_or_else(invalid);
        }
    }
    // Date-only forms are UTC midnight
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(invalid)
}

/// Format a creation timestamp for display.
///
/// Empty input gives an empty string; anything unparseable is returned
/// unchanged. Never panics.
pub fn fmt_date<R: DateRenderer + ?Sized>(raw: &str, renderer: &R) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match renderer.parse(raw) {
        Some(at) => renderer.format_datetime(at),
        None => {
            log::debug!("showing raw timestamp: {:?}", raw);
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UtcRenderer;

    impl DateRenderer for UtcRenderer {
        fn format_datetime(&self, at: DateTime<Utc>) -> String {
            at.format("%d/%m/%Y %H:%M").to_string()
        }

        fn format_time(&self, at: DateTime<Utc>) -> String {
            at.format("%H:%M").to_string()
        }
    }

    #[test]
    fn test_fmt_date_empty() {
        assert_eq!(fmt_date("", &UtcRenderer), "");
    }

    #[test]
    fn test_fmt_date_rfc3339() {
        assert_eq!(fmt_date("2024-01-01T00:00:00Z", &UtcRenderer), "01/01/2024 00:00");
        assert_eq!(fmt_date("2024-02-01T10:30:00+02:00", &UtcRenderer), "01/02/2024 08:30");
    }

    #[test]
    fn test_fmt_date_http_date() {
        assert_eq!(
            fmt_date("Mon, 01 Jan 2024 12:00:00 GMT", &UtcRenderer),
            "01/01/2024 12:00"
        );
    }

    #[test]
    fn test_fmt_date_date_only_is_utc() {
        assert_eq!(fmt_date("2024-03-05", &UtcRenderer), "05/03/2024 00:00");
    }

    #[test]
    fn test_fmt_date_naive_is_parsed() {
        let raw = "2024-01-01T09:15:00.123456";
        let expected = Local
            .from_local_datetime(&NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").unwrap())
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(fmt_date(raw, &UtcRenderer), UtcRenderer.format_datetime(expected));
    }

    #[test]
    fn test_fmt_date_invalid_returns_input() {
        for raw in ["not a date", "   ", "2024-13-45", "<b>yesterday</b>", "🙂"] {
            assert_eq!(fmt_date(raw, &UtcRenderer), raw);
        }
    }

    /// Accepts slash dates the way a browser `Date` would
    struct SlashRenderer;

    impl DateRenderer for SlashRenderer {
        fn format_datetime(&self, at: DateTime<Utc>) -> String {
            UtcRenderer.format_datetime(at)
        }

        fn format_time(&self, at: DateTime<Utc>) -> String {
            UtcRenderer.format_time(at)
        }

        fn parse(&self, raw: &str) -> Option<DateTime<Utc>> {
            NaiveDateTime::parse_from_str(raw, "%Y/%m/%d %H:%M")
                .ok()
                .map(|naive| naive.and_utc())
        }
    }

    #[test]
    fn test_fmt_date_uses_renderer_parser() {
        assert_eq!(fmt_date("2024/01/01 10:00", &SlashRenderer), "01/01/2024 10:00");
        assert_eq!(fmt_date("2024/01/01 10:00", &UtcRenderer), "2024/01/01 10:00");
        assert_eq!(fmt_date("2024-01-01T00:00:00Z", &SlashRenderer), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_parse_timestamp_error() {
        assert_eq!(
            parse_timestamp("soon"),
            Err(ViewError::InvalidTimestamp("soon".to_string()))
        );
    }

    #[test]
    fn test_safe_text() {
        assert_eq!(safe_text(None), "");
        assert_eq!(safe_text(Some("<script>")), "<script>");
    }
}
