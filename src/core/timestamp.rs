//! Timestamp rendering for the `%d` pattern directive and the JSON layout

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How an event timestamp is rendered
///
/// # Examples
///
/// ```
/// use rust_logger_hierarchy::core::TimestampFormat;
/// use chrono::Utc;
///
/// let rendered = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(rendered.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 in UTC with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// ISO 8601 in the host's local time zone with offset:
    /// `2025-01-08T11:30:45.123+01:00`
    Iso8601Local,

    /// RFC 3339: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible format string
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Iso8601Local => datetime
                .with_timezone(&Local)
                .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

impl FromStr for TimestampFormat {
    type Err = std::convert::Infallible;

    /// Named formats are matched case-insensitively; anything else is taken
    /// as a strftime string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "iso8601" | "iso-8601" => TimestampFormat::Iso8601,
            "iso8601-micros" => TimestampFormat::Iso8601Micros,
            "iso8601-local" | "local" => TimestampFormat::Iso8601Local,
            "rfc3339" => TimestampFormat::Rfc3339,
            "unix-millis" | "unixmillis" => TimestampFormat::UnixMillis,
            _ => TimestampFormat::Custom(s.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_iso8601_local_has_offset() {
        let result = TimestampFormat::Iso8601Local.format(&fixed_datetime());
        let offset = &result[result.len() - 6..];
        assert!(offset.starts_with('+') || offset.starts_with('-'), "{}", result);
        assert_eq!(&offset[3..4], ":");
    }

    #[test]
    fn test_unix_millis_format() {
        let result = TimestampFormat::UnixMillis.format(&fixed_datetime());
        assert_eq!(result, "1736332245123");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_parse_names_and_custom() {
        assert_eq!("ISO8601".parse::<TimestampFormat>(), Ok(TimestampFormat::Iso8601));
        assert_eq!("local".parse::<TimestampFormat>(), Ok(TimestampFormat::Iso8601Local));
        assert_eq!("unix-millis".parse::<TimestampFormat>(), Ok(TimestampFormat::UnixMillis));
        assert_eq!(
            "%H:%M:%S".parse::<TimestampFormat>(),
            Ok(TimestampFormat::Custom("%H:%M:%S".to_string()))
        );
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
