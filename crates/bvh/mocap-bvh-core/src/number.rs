//! Numeric token parsers built on the combinator layer.
//!
//! Both parsers scan a permissive character class first and then hand the
//! captured run to strict `str::parse` conversion: a run the converter
//! rejects (`1.2.3`, `--5`, a digit run overflowing `u32`) fails the parse
//! like any other mismatch.

use crate::cursor::Cursor;

/// Character class for floating-point tokens. Wider than valid float
/// syntax; the conversion afterwards rejects malformed runs.
const DOUBLE_CHARS: &str = "-0123456789.";

const DIGITS: &str = "0123456789";

/// Consume a maximal `[-0-9.]` run (at least one byte) and convert it to an
/// IEEE-754 double. Returns the advanced cursor and the value, or the
/// invalid cursor and `0.0`.
pub fn parse_double(cursor: Cursor<'_>) -> (Cursor<'_>, f64) {
    let mut token = "";
    let cursor = cursor.capture(&mut token, |c| c.at_least(1, |c| c.one_of(DOUBLE_CHARS)));
    if !cursor.is_valid() {
        return (Cursor::failed(), 0.0);
    }
    match token.parse::<f64>() {
        Ok(value) => (cursor, value),
        Err(_) => (Cursor::failed(), 0.0),
    }
}

/// Consume a maximal decimal-digit run (at least one digit) and convert it
/// to a `u32`. Returns the advanced cursor and the value, or the invalid
/// cursor and `0`.
pub fn parse_uint(cursor: Cursor<'_>) -> (Cursor<'_>, u32) {
    let mut token = "";
    let cursor = cursor.capture(&mut token, |c| c.at_least(1, |c| c.one_of(DIGITS)));
    if !cursor.is_valid() {
        return (Cursor::failed(), 0);
    }
    match token.parse::<u32>() {
        Ok(value) => (cursor, value),
        Err(_) => (Cursor::failed(), 0),
    }
}
