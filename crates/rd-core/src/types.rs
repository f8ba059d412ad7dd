//! Common types used throughout ResourceDesk

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::RdError;
use crate::result::RdResult;

/// Hours of effort or capacity
pub type Hours = f64;

/// Parse an ISO 8601 calendar date.
///
/// Accepts a plain `YYYY-MM-DD` date as well as an RFC 3339 or naive
/// timestamp, in which case only the date part is kept. Anything else fails
/// with [`RdError::InvalidDate`].
pub fn parse_date(value: &str) -> RdResult<NaiveDate> {
    let trimmed = value.trim();

    let parsed = if trimmed.contains('T') {
        DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| dt.date_naive())
            .or_else(|_| {
                NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
            })
    } else {
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
    };

    parsed.map_err(|source| RdError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// Parse an optional date, treating an empty string as absent
pub fn parse_optional_date(value: Option<&str>) -> RdResult<Option<NaiveDate>> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_date(v).map(Some),
        _ => Ok(None),
    }
}

/// Whole days from `from` to `to` (negative when `to` is in the past)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_date("2025-05-20").unwrap(), date(2025, 5, 20));
    }

    #[test]
    fn test_parse_timestamp_keeps_date() {
        assert_eq!(parse_date("2025-05-20T13:45:00Z").unwrap(), date(2025, 5, 20));
        assert_eq!(parse_date("2025-05-20T13:45:00").unwrap(), date(2025, 5, 20));
    }

    #[test]
    fn test_parse_malformed_date_fails() {
        let err = parse_date("20th of May").unwrap_err();
        assert!(matches!(err, RdError::InvalidDate { .. }));

        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("  ")).unwrap(), None);
        assert_eq!(
            parse_optional_date(Some("2025-06-01")).unwrap(),
            Some(date(2025, 6, 1))
        );
    }

    #[test]
    fn test_days_between() {
        assert_eq!(days_between(date(2025, 5, 15), date(2025, 5, 20)), 5);
        assert_eq!(days_between(date(2025, 5, 20), date(2025, 5, 15)), -5);
    }
}
