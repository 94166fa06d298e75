//! Date and time formatting shared across the dashboard tables.

use chrono::{DateTime, Utc};

/// Format a timestamp for table cells: DD/MM/YYYY HH:MM.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Format a date-only value: DD/MM/YYYY.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

/// Optional timestamps render as a dash so sparse documents still line up.
pub fn format_optional_datetime(dt: Option<&DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => format_datetime(dt),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        assert_eq!(format_datetime(&dt), "15/01/2026 10:00");
        assert_eq!(format_date(&dt), "15/01/2026");
    }

    #[test]
    fn test_missing_timestamp_renders_dash() {
        assert_eq!(format_optional_datetime(None), "-");
        let dt = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(format_optional_datetime(Some(&dt)), "31/12/2025 23:59");
    }
}
