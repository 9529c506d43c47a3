//! Date display helpers for tables and read-only form views.

use chrono::DateTime;

/// Format an RFC3339 timestamp as "YYYY-MM-DD HH:MM" for table cells.
/// Unparseable input is returned unchanged (silent degradation).
pub fn format_datetime(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Date-only variant, "YYYY-MM-DD".
pub fn format_date(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(parsed) => parsed.format("%Y-%m-%d").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-03-14T09:26:53Z"),
            "2026-03-14 09:26"
        );
        assert_eq!(
            format_datetime("2026-03-14T09:26:53+02:00"),
            "2026-03-14 09:26"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-14T09:26:53Z"), "2026-03-14");
    }

    #[test]
    fn test_unparseable_input_passes_through() {
        assert_eq!(format_datetime("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
    }
}
