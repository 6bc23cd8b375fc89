//! Dependency-free numeric literal parsing.
//!
//! This module interprets field text as an integer (arbitrary radix 2-36 with
//! `0x`/`0o`/`0b` prefix notation) or a floating-point value (sign, fraction,
//! exponent, and the special literals `inf`, `infinity`, `nan`), without going
//! through `str::parse`, `from_str_radix`, or any other general-purpose
//! numeric-parsing facility.
//!
//! Both entry points are pure functions of the text: they return `Some(value)`
//! on a complete parse and `None` on any malformed input. A partially-consumed
//! or garbled number is never returned.
//!
//! ## Grammar notes
//!
//! - A run of leading spaces and a run of trailing spaces or NUL terminators is
//!   trimmed before parsing. Other whitespace (tabs, newlines) is not trimmed
//!   and fails the digit scan.
//! - Digits extend through ASCII letters, so radixes up to 36 work: `z` is 35.
//! - Integer accumulation is Horner's method over `i64` with wrapping
//!   arithmetic; values wider than 64 bits wrap silently rather than erroring.
//! - The float exponent is applied by repeated multiplication or division, one
//!   step per unit of magnitude. This is O(|exponent|) and carries no
//!   overflow/underflow guard; extreme exponents saturate to infinity or zero
//!   the way repeated `f64` arithmetic does.
//!
//! ## Examples
//!
//! ```rust
//! use gridsv::{parse_float, parse_integer};
//!
//! assert_eq!(parse_integer("42", 10), Some(42));
//! assert_eq!(parse_integer("-0x2A", 10), Some(-42));
//! assert_eq!(parse_integer("zz", 36), Some(1295));
//! assert_eq!(parse_integer("12a", 10), None);
//!
//! assert_eq!(parse_float("-1.5e2"), Some(-150.0));
//! assert_eq!(parse_float("inf"), Some(f64::INFINITY));
//! assert_eq!(parse_float("abc"), None);
//! ```

/// Maps an ASCII byte to its digit value in `base`, extending `0-9` with
/// `a-z`/`A-Z` up to base 36. Returns `None` for non-digits and for digits
/// that do not exist in `base`.
fn digit_value(byte: u8, base: u32) -> Option<u32> {
    let digit = match byte {
        b'0'..=b'9' => u32::from(byte - b'0'),
        b'a'..=b'z' => u32::from(byte - b'a') + 10,
        b'A'..=b'Z' => u32::from(byte - b'A') + 10,
        _ => return None,
    };
    if digit < base {
        Some(digit)
    } else {
        None
    }
}

/// Trims leading spaces, then trailing spaces and NUL terminators.
/// Returns `None` when nothing remains.
fn trim(bytes: &[u8]) -> Option<&[u8]> {
    let mut first = 0;
    let mut last = bytes.len();
    loop {
        if first == last {
            return None;
        }
        if bytes[first] == b' ' {
            first += 1;
        } else if bytes[last - 1] == b' ' || bytes[last - 1] == b'\0' {
            last -= 1;
        } else {
            return Some(&bytes[first..last]);
        }
    }
}

/// Splits an optional leading `-` sign off the front of `bytes`.
fn split_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        _ => (false, bytes),
    }
}

fn integer_from_bytes(bytes: &[u8], radix: u32) -> Option<i64> {
    let bytes = trim(bytes)?;
    let (negative, bytes) = split_sign(bytes);
    if bytes.is_empty() {
        return None;
    }
    let mut base = radix;
    let mut digits = bytes;
    if bytes[0] == b'0' {
        match bytes.get(1).map(u8::to_ascii_lowercase) {
            // A bare "0" (or "-0") is zero regardless of radix.
            None => return Some(0),
            Some(b'x') => {
                base = 16;
                digits = &bytes[2..];
            }
            Some(b'o') => {
                base = 8;
                digits = &bytes[2..];
            }
            Some(b'b') => {
                base = 2;
                digits = &bytes[2..];
            }
            // Not a prefix: ordinary accumulation starting at the leading zero.
            Some(other) => {
                digit_value(other, 10)?;
            }
        }
    }
    let mut result: i64 = 0;
    for &byte in digits {
        let digit = i64::from(digit_value(byte, base)?);
        result = result.wrapping_mul(i64::from(base)).wrapping_add(digit);
    }
    Some(if negative { result.wrapping_neg() } else { result })
}

/// Parses `text` as an integer in the given radix.
///
/// Supports an optional `-` sign and the case-insensitive prefixes `0x`, `0o`
/// and `0b`, which override `radix` with 16, 8 and 2 respectively. A prefix
/// with no digits after it (`"0x"`) is zero. Any character that is not a valid
/// digit in the working base fails the whole parse.
///
/// # Examples
///
/// ```rust
/// use gridsv::parse_integer;
///
/// assert_eq!(parse_integer("42", 10), Some(42));
/// assert_eq!(parse_integer("0b101", 10), Some(5));
/// assert_eq!(parse_integer("ff", 16), Some(255));
/// assert_eq!(parse_integer(" 7 ", 10), Some(7));
/// assert_eq!(parse_integer("12a", 10), None);
/// assert_eq!(parse_integer("", 10), None);
/// ```
#[must_use]
pub fn parse_integer(text: &str, radix: u32) -> Option<i64> {
    integer_from_bytes(text.as_bytes(), radix)
}

/// Matches the special float literals, case-insensitively, in priority order
/// `infinity`, `inf`, `nan`. The match must cover the whole remaining text.
fn special_value(bytes: &[u8]) -> Option<f64> {
    if bytes.eq_ignore_ascii_case(b"infinity") || bytes.eq_ignore_ascii_case(b"inf") {
        Some(f64::INFINITY)
    } else if bytes.eq_ignore_ascii_case(b"nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Parses `text` as a floating-point number.
///
/// Supports an optional `-` sign, a decimal point, E notation with a signed
/// integer exponent, and the case-insensitive literals `inf`, `infinity` and
/// `nan`. Hexadecimal float notation is not supported.
///
/// The integer part accumulates most-significant digit first; the fractional
/// part accumulates least-significant digit first, scanning backward from the
/// exponent marker (or the end of the mantissa) toward the decimal point.
///
/// # Examples
///
/// ```rust
/// use gridsv::parse_float;
///
/// assert_eq!(parse_float("3.14"), Some(3.14));
/// assert_eq!(parse_float("-1.5e2"), Some(-150.0));
/// assert_eq!(parse_float(".5"), Some(0.5));
/// assert_eq!(parse_float("infinity"), Some(f64::INFINITY));
/// assert!(parse_float("nan").unwrap().is_nan());
/// assert_eq!(parse_float("1e+5"), None); // '+' is not part of the grammar
/// assert_eq!(parse_float("abc"), None);
/// ```
#[must_use]
pub fn parse_float(text: &str) -> Option<f64> {
    let bytes = trim(text.as_bytes())?;
    let (negative, bytes) = split_sign(bytes);
    if bytes.is_empty() {
        return None;
    }
    // Once the text starts like a special literal it either matches one
    // exactly or fails; there is no fallback to numeric scanning.
    let head = bytes[0].to_ascii_lowercase();
    if head == b'i' || head == b'n' {
        let value = special_value(bytes)?;
        return Some(if negative { -value } else { value });
    }
    // The first exponent marker bounds the mantissa. Position 0 can never be
    // a marker: a leading 'e' fails the digit scan below anyway.
    let exponent_marker = bytes[1..]
        .iter()
        .position(|byte| byte.to_ascii_lowercase() == b'e')
        .map(|offset| offset + 1);
    let mantissa = &bytes[..exponent_marker.unwrap_or(bytes.len())];

    // Whole part, most significant digit first.
    let mut result = 0f64;
    let mut index = 0;
    while index < mantissa.len() {
        let byte = mantissa[index];
        index += 1;
        if byte == b'.' {
            break;
        }
        let digit = digit_value(byte, 10)?;
        result = result * 10.0 + f64::from(digit);
    }
    // Fractional part, least significant digit first.
    let mut decimals = 0f64;
    let mut end = mantissa.len();
    while index < end {
        end -= 1;
        let digit = digit_value(mantissa[end], 10)?;
        decimals = decimals / 10.0 + f64::from(digit);
    }
    result += decimals / 10.0;

    if let Some(marker) = exponent_marker {
        let mut exponent = integer_from_bytes(&bytes[marker + 1..], 10)?;
        while exponent > 0 {
            result *= 10.0;
            exponent -= 1;
        }
        while exponent < 0 {
            result /= 10.0;
            exponent += 1;
        }
    }
    Some(if negative { -result } else { result })
}
