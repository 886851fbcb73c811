//! Utilities for date and time formatting
//!
//! Dates are shown the way browsers render pt-BR: `dd/mm/yyyy` and
//! `dd/mm/yyyy, HH:MM:SS`.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const DATETIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Format a timestamp as DD/MM/YYYY in the given time zone
/// Example: 2024-03-15T14:02:26Z -> "15/03/2024"
pub fn format_date<Tz>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Format a timestamp as DD/MM/YYYY, HH:MM:SS in the given time zone
/// Example: 2024-03-15T14:02:26.123Z -> "15/03/2024, 14:02:26"
pub fn format_datetime<Tz>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format(DATETIME_FORMAT).to_string()
}
