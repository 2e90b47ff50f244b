use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Utc};
use docmap_core::descriptor::Resolution;
use docmap_core::Value;

use super::{FieldBridge, TwoWayFieldBridge};
use crate::error::BridgeError;

/// Padding applied to truncated text before parsing: `yyyyMMddHHmmssSSS`
/// with month and day set to 01 and the time to zero.
const FULL_DEFAULTS: &str = "00000101000000000";

/// Dates rendered as sortable `yyyyMMddHHmmssSSS` text, truncated to the
/// configured resolution. Only years 0 through 9999 have a four-digit
/// rendering; dates outside that range produce no text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateBridge {
    resolution: Resolution,
}

impl DateBridge {
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn width(&self) -> usize {
        match self.resolution {
            Resolution::Year => 4,
            Resolution::Month => 6,
            Resolution::Day => 8,
            Resolution::Hour => 10,
            Resolution::Minute => 12,
            Resolution::Second => 14,
            Resolution::Millisecond => 17,
        }
    }

    fn format(&self, date: &DateTime<Utc>) -> Option<String> {
        if !(0..=9999).contains(&date.year()) {
            return None;
        }
        let mut text = format!(
            "{}{:03}",
            date.format("%Y%m%d%H%M%S"),
            date.timestamp_subsec_millis()
        );
        text.truncate(self.width());
        Some(text)
    }

    fn error(&self, text: &str, reason: &str) -> BridgeError {
        BridgeError::Parse {
            bridge: "date".into(),
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl FieldBridge for DateBridge {
    fn object_to_string(&self, value: &Value) -> Option<String> {
        match value {
            Value::Date(date) => self.format(date),
            _ => None,
        }
    }

    fn as_two_way(&self) -> Option<&dyn TwoWayFieldBridge> {
        Some(self)
    }
}

impl TwoWayFieldBridge for DateBridge {
    fn string_to_object(&self, text: &str) -> Result<Value, BridgeError> {
        if text.len() != self.width() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.error(text, "unexpected length or non-digit characters"));
        }

        let full = format!("{text}{}", &FULL_DEFAULTS[text.len()..]);
        let seconds = NaiveDateTime::parse_from_str(&full[..14], "%Y%m%d%H%M%S")
            .map_err(|e| self.error(text, &e.to_string()))?;
        let millis: i64 = full[14..]
            .parse()
            .map_err(|_| self.error(text, "invalid milliseconds"))?;

        Ok(Value::Date(
            (seconds + Duration::milliseconds(millis)).and_utc(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 13, 45, 30).unwrap() + Duration::milliseconds(123)
    }

    #[test]
    fn test_truncates_to_resolution() {
        let date = Value::Date(sample());
        let day = DateBridge::new(Resolution::Day);
        assert_eq!(day.object_to_string(&date).as_deref(), Some("20240315"));

        let full = DateBridge::default();
        assert_eq!(
            full.object_to_string(&date).as_deref(),
            Some("20240315134530123")
        );
    }

    #[test]
    fn test_parses_truncated_text() {
        let month = DateBridge::new(Resolution::Month);
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(month.string_to_object("202403").unwrap(), Value::Date(expected));

        let full = DateBridge::default();
        assert_eq!(
            full.string_to_object("20240315134530123").unwrap(),
            Value::Date(sample())
        );
    }

    #[test]
    fn test_rejects_wrong_width() {
        let day = DateBridge::new(Resolution::Day);
        assert!(day.string_to_object("202403").is_err());
        assert!(day.string_to_object("2024031x").is_err());
        assert!(day.string_to_object("20241345").is_err());
    }

    #[test]
    fn test_years_without_four_digits_produce_nothing() {
        let full = DateBridge::default();
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert!(full.object_to_string(&Value::Date(far)).is_none());
        let before = Utc.with_ymd_and_hms(-1, 12, 31, 0, 0, 0).unwrap();
        assert!(full.object_to_string(&Value::Date(before)).is_none());

        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let text = full.object_to_string(&Value::Date(last)).unwrap();
        assert_eq!(text, "99991231235959000");
        assert_eq!(full.string_to_object(&text).unwrap(), Value::Date(last));
    }
}
