// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Offset-less date-time layouts, read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp string into epoch milliseconds.
///
/// Accepts RFC 3339, RFC 2822, offset-less ISO 8601 date-times (UTC) and bare
/// `YYYY-MM-DD` dates (UTC midnight). Returns `None` for anything else.
pub fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.timestamp_millis());
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return Some(date.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(date.and_utc().timestamp_millis());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc().timestamp_millis())
}
