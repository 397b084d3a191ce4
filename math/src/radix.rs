//! Signed integer literals in bases 2 through 16.
//!
//! Literals may carry a leading `+` or `-`, and both ASCII whitespace and `_`
//! are accepted as separators anywhere in the digit run (`"1_000"`,
//! `"ff ff"`). Decoding is exact: the magnitude is capped at `i64::MAX`
//! before the sign is applied, and anything larger is rejected with
//! [`DecodeError::Overflow`] rather than wrapped. The decodable range is
//! therefore symmetric and `i64::MIN` has no literal form.

use crate::error::DecodeError;

/// Smallest base whose digit alphabet is meaningful.
pub const MIN_BASE: u32 = 2;

/// Largest base covered by the `0-9a-f` digit alphabet.
pub const MAX_BASE: u32 = 16;

/// Largest magnitude a literal may accumulate, whatever its sign.
const MAGNITUDE_LIMIT: u64 = i64::MAX.unsigned_abs();

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Map a character of the `0-9a-fA-F` alphabet to its digit value.
#[inline]
pub const fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'a'..='f' => Some(ch as u32 - 'a' as u32 + 10),
        'A'..='F' => Some(ch as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

#[inline]
const fn is_separator(ch: char) -> bool {
    ch == '_' || ch.is_ascii_whitespace()
}

/// Decode `literal` as a signed integer written in `base`.
///
/// The base itself is not range checked: a digit whose value is `>= base` is
/// reported as [`DecodeError::DigitOutOfRange`], so bases below 2 (negative
/// ones included) reject every digit and bases above 16 simply accept the
/// whole alphabet.
///
/// ```
/// use math::radix::decode;
///
/// assert_eq!(decode("-ff", 16), Ok(-255));
/// assert_eq!(decode("1010", 2), Ok(10));
/// assert_eq!(decode(" 1_000 ", 10), Ok(1000));
/// ```
pub fn decode(literal: &str, base: i64) -> Result<i64, DecodeError> {
    let trimmed = literal.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let offset = literal.len() - digits.len();

    let mut magnitude: u64 = 0;
    let mut seen_digit = false;
    for (pos, ch) in digits.char_indices() {
        if is_separator(ch) {
            continue;
        }
        let digit = digit_value(ch).ok_or(DecodeError::InvalidDigit {
            ch,
            position: offset + pos,
        })?;
        if i64::from(digit) >= base {
            return Err(DecodeError::DigitOutOfRange { ch, digit, base });
        }
        // base > digit >= 0 from here on.
        magnitude = magnitude
            .checked_mul(base.unsigned_abs())
            .and_then(|shifted| shifted.checked_add(u64::from(digit)))
            .filter(|&next| next <= MAGNITUDE_LIMIT)
            .ok_or(DecodeError::Overflow)?;
        seen_digit = true;
    }

    if !seen_digit {
        return Err(DecodeError::EmptyLiteral);
    }

    let value = i64::try_from(magnitude).map_err(|_| DecodeError::Overflow)?;
    Ok(if negative { -value } else { value })
}

/// Render `value` in `base` using lowercase digits and a leading `-` for
/// negative values. This is the inverse of [`decode`] for separator-free
/// literals of every value except `i64::MIN`, whose magnitude is out of
/// decoding range.
pub fn encode(value: i64, base: u32) -> Result<String, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::UnsupportedBase(base));
    }

    let base = u64::from(base);
    let mut magnitude = value.unsigned_abs();
    let mut out = Vec::with_capacity(65);
    loop {
        out.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        out.push(b'-');
    }
    out.reverse();

    Ok(out.into_iter().map(char::from).collect())
}
