//! Parsing and display of `created_at` values.
//!
//! The backend serializes naive `DateTime` columns, so the same field can show
//! up with or without an offset, with or without fractional seconds, or as a
//! raw epoch. Everything is normalized to a `DateTime` in the target timezone
//! and printed in the en-US locale layout, e.g. `1/1/2024, 12:00:00 AM`.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Shown when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Epoch values above this magnitude are taken to be milliseconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%#z"];

/// Parse `raw` into a datetime in `tz`.
///
/// Offset-less datetimes are read as wall-clock time in `tz`; bare dates as
/// UTC midnight.
pub fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(epoch) = parse_epoch(raw) {
        return if epoch.abs() > EPOCH_MILLIS_THRESHOLD {
            tz.timestamp_millis_opt(epoch).single()
        } else {
            tz.timestamp_opt(epoch, 0).single()
        };
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(tz));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).with_timezone(tz));
    }

    None
}

fn parse_epoch(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Render `raw` in `tz`, or [`INVALID_DATE`].
pub fn format_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match parse_in(raw, tz) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Render `raw` in the machine's local timezone.
pub fn format_local(raw: &str) -> String {
    format_in(raw, &Local)
}
