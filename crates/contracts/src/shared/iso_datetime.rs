//! Serde helpers for timestamps sent by the orders API.
//!
//! The API sends ISO strings. RFC 3339 values (`2021-03-01T10:00:00Z`,
//! `2021-03-01T10:00:00-03:00`) keep their offset. Offset-less date-times
//! (`2021-03-01T10:00:00`, `2021-03-01T10:00:00.123`) are wall-clock time in
//! the browser's zone; a bare date (`2021-03-01`) is midnight UTC.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse an ISO timestamp into UTC, `None` if the string is not a timestamp.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    parse_in(raw, &Local)
}

/// Same as [`parse`], with offset-less date-times read in `tz`.
pub fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(from_wall_clock(&naive, tz));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Wall-clock time in `tz`. A time skipped by a DST jump is moved forward
/// by an hour.
fn from_wall_clock<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    tz.from_local_datetime(naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(*naive + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Same as the parent module for nullable fields (`null` or missing → `None`).
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, Timelike};

    #[test]
    fn test_parse_rfc3339_keeps_offset() {
        let dt = parse("2021-03-01T10:00:00-03:00").unwrap();
        assert_eq!(dt.hour(), 13);
        assert_eq!(dt.day(), 1);
    }

    #[test]
    fn test_parse_naive_in_given_zone() {
        let dt = parse_in("2021-03-01T10:15:30.250", &Utc).unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (10, 15, 30));

        // 01:30 wall-clock in São Paulo (UTC-3) is 04:30 UTC, same day
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();
        let dt = parse_in("2021-03-01T01:30:00", &sao_paulo).unwrap();
        assert_eq!((dt.day(), dt.hour(), dt.minute()), (1, 4, 30));
        assert_eq!(dt.with_timezone(&sao_paulo).hour(), 1);
    }

    #[test]
    fn test_parse_offset_ignores_zone() {
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();
        let dt = parse_in("2021-03-01T01:30:00Z", &sao_paulo).unwrap();
        assert_eq!((dt.day(), dt.hour()), (1, 1));
    }

    #[test]
    fn test_parse_date_only() {
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();
        let dt = parse_in("2021-12-31", &sao_paulo).unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2021, 12, 31, 0));
    }

    #[test]
    fn test_invalid_format() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }
}
