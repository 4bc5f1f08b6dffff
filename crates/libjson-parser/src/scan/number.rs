//! The numeric grammar: `number = int frac exp`.
//!
//! Only `int` is mandatory. `frac` and `exp` never fail: once committed to
//! a `.` or `e`/`E`, any failure in the remainder unwinds to the empty
//! match rather than erroring, because both productions are optional in the
//! grammar.

use super::ScanError;
use super::ScanResult;
use super::classify::is_digit;
use super::classify::is_one_to_nine;
use crate::JsonParseErrorKind;

/// Consumes one optional `+` or `-`.
///
/// Never fails; returns 0 or 1 bytes. Note that a leading `+` is only legal
/// inside an exponent; `int` handles its own `-` directly.
pub fn sign(buf: &[u8]) -> usize {
    match buf.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    }
}

/// Consumes the maximal run of digits, requiring at least one.
///
/// Fails with `InvalidDigit` when the first byte is not a digit or the
/// input is empty.
pub fn digits(buf: &[u8]) -> ScanResult {
    let count = buf.iter().take_while(|&&b| is_digit(b)).count();
    if count == 0 {
        Err(ScanError::new(JsonParseErrorKind::InvalidDigit))
    } else {
        Ok(count)
    }
}

/// Consumes an integer: `digit | onenine digits | '-' digit | '-' onenine
/// digits`.
///
/// A leading zero consumes exactly one byte, so `000042` yields `0` — the
/// grammar has no multi-zero numbers. A leading `-` recurses on the
/// remainder, rejecting a second consecutive `-` with `UnexpectedChar`.
pub fn int(buf: &[u8]) -> ScanResult {
    match buf.first() {
        None => Err(ScanError::new(JsonParseErrorKind::NothingToParse)),
        Some(b'-') => {
            if buf.get(1) == Some(&b'-') {
                return Err(ScanError::at(
                    JsonParseErrorKind::UnexpectedChar { found: b'-' },
                    1,
                ));
            }
            let rest = int(&buf[1..]).map_err(|e| e.rebase(1))?;
            Ok(1 + rest)
        }
        Some(b'0') => Ok(1),
        Some(&b) if is_one_to_nine(b) => {
            Ok(1 + buf[1..].iter().take_while(|&&b| is_digit(b)).count())
        }
        Some(_) => Err(ScanError::new(JsonParseErrorKind::InvalidDigit)),
    }
}

/// Consumes a fraction: `'.' digits`, or the empty match.
///
/// The `.` is committed only when digits follow; `1.x` leaves the `.`
/// unconsumed rather than failing, since the whole production is optional.
pub fn frac(buf: &[u8]) -> usize {
    if buf.first() != Some(&b'.') {
        return 0;
    }
    match digits(&buf[1..]) {
        Ok(count) => 1 + count,
        Err(_) => 0,
    }
}

/// Consumes an exponent: `('e' | 'E') sign digits`, or the empty match.
///
/// Same rollback policy as [`frac`]: any failure after the `e`/`E` unwinds
/// to zero bytes consumed, never a hard error.
pub fn exp(buf: &[u8]) -> usize {
    match buf.first() {
        Some(b'e' | b'E') => {}
        _ => return 0,
    }
    let mut consumed = 1;
    consumed += sign(&buf[consumed..]);
    match digits(&buf[consumed..]) {
        Ok(count) => consumed + count,
        Err(_) => 0,
    }
}

/// Consumes a complete numeral: `int frac exp`.
///
/// Only the int part is mandatory; its failure propagates unchanged. The
/// frac and exp parts each contribute zero or more bytes.
pub fn number(buf: &[u8]) -> ScanResult {
    let mut consumed = int(buf)?;
    consumed += frac(&buf[consumed..]);
    consumed += exp(&buf[consumed..]);
    Ok(consumed)
}
