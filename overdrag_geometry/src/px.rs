// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-pixel conversions.

/// Parse a CSS length into whole pixels.
///
/// Mirrors integer parsing of computed style strings: leading whitespace and
/// an optional sign are accepted, digits are read until the first non-digit,
/// and anything that does not start with a digit (`"auto"`, `""`, `"none"`)
/// yields `0`. Fractions are truncated, so `"12.7px"` is `12` and `"-3.5px"`
/// is `-3`. Values beyond `i32` saturate.
pub fn parse_px(value: &str) -> i32 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut magnitude: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        magnitude = (magnitude * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }

    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}

/// Round a fractional layout value to whole pixels, half away from zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "saturating float to int conversion is the intended behavior"
)]
pub fn round_px(value: f64) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}
