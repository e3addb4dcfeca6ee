//! Literal codec for condition values.
//!
//! Conditions hold values in display form; this module turns them into SQL
//! literals for a field's [`FieldType`] and provides the reverse conversions
//! the parser needs on import.
//!
//! # Coercion
//!
//! Numeric conversions are lenient: input that is not a number becomes `0`
//! rather than an error.
//!
//! ```
//! use segql::value::{parse_int_lenient, ticks_to_time, time_to_ticks};
//!
//! assert_eq!(parse_int_lenient("12abc"), 12);
//! assert_eq!(parse_int_lenient("abc"), 0);
//! assert_eq!(time_to_ticks("01:02:03.456"), 37_234_560_000);
//! assert_eq!(ticks_to_time(37_234_560_000), "01:02:03.456");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Operator;
use crate::fields::FieldType;

/// Display string for an unset tick value.
pub const TICK_SENTINEL: &str = "--:--:--.---";

/// Ticks per millisecond (one tick is 100 ns).
pub const TICKS_PER_MILLISECOND: i64 = 10_000;

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+):(\d{1,2}):(\d{1,2})(?:\.(\d{1,3}))?\s*$").expect("valid time pattern")
});

/// Render a value as the SQL literal for a field of `field_type`.
///
/// Empty values always become `''`, whatever the type. Null checks never
/// reach this function since they carry no value.
pub fn format_literal(value: &str, field_type: FieldType, operator: Operator) -> String {
    if value.is_empty() {
        return "''".to_string();
    }

    match field_type {
        FieldType::Text | FieldType::Enumerable => {
            if operator.is_pattern() {
                quote_string(&format!("%{}%", value))
            } else {
                quote_string(value)
            }
        }
        FieldType::Integer => parse_int_lenient(value).to_string(),
        FieldType::Ticks => time_to_ticks(value).to_string(),
        FieldType::Boolean => {
            if value == "1" {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
    }
}

/// Wrap in single quotes, doubling any embedded quote.
pub fn quote_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Parse the leading base-10 integer of `s`.
///
/// Accepts surrounding whitespace and an optional sign, then reads digits up
/// to the first non-digit. Returns `0` when there are no digits at all.
pub fn parse_int_lenient(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// Convert an `HH:MM:SS.mmm` display string to ticks.
///
/// The sentinel and anything that does not look like a time decode to `0`.
/// A short fraction is read as a decimal fraction, so `.4` is 400 ms.
pub fn time_to_ticks(display: &str) -> i64 {
    let Some(caps) = TIME_PATTERN.captures(display) else {
        return 0;
    };

    let part = |i: usize| -> i64 {
        caps.get(i)
            .map(|m| m.as_str().parse::<i64>().unwrap_or(0))
            .unwrap_or(0)
    };

    let millis = caps
        .get(4)
        .map(|m| format!("{:0<3}", m.as_str()).parse::<i64>().unwrap_or(0))
        .unwrap_or(0);

    let seconds = part(1)
        .saturating_mul(3600)
        .saturating_add(part(2) * 60)
        .saturating_add(part(3));

    seconds
        .saturating_mul(1000)
        .saturating_add(millis)
        .saturating_mul(TICKS_PER_MILLISECOND)
}

/// Convert ticks to the `HH:MM:SS.mmm` display string.
///
/// Zero (and negative) tick counts have no meaningful position and decode to
/// [`TICK_SENTINEL`].
pub fn ticks_to_time(ticks: i64) -> String {
    if ticks <= 0 {
        return TICK_SENTINEL.to_string();
    }

    let total_ms = ticks / TICKS_PER_MILLISECOND;
    let millis = total_ms % 1000;
    let total_seconds = total_ms / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

/// Strip one leading and one trailing `%` from a LIKE pattern.
pub fn strip_wildcards(pattern: &str) -> String {
    let inner = pattern.strip_prefix('%').unwrap_or(pattern);
    let inner = inner.strip_suffix('%').unwrap_or(inner);
    inner.to_string()
}
