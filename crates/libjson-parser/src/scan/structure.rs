//! The recursive structural scanners: value dispatch, elements, members,
//! arrays, objects, and the whitespace-wrapped element unit.
//!
//! # Depth budget
//!
//! The grammar is unbounded in nesting, so every structural scanner threads
//! an explicit remaining-depth budget. [`value`] decrements it on entry and
//! fails `NestingTooDeep` when it runs out, converting what would otherwise
//! be call-stack exhaustion into an ordinary error.
//!
//! # List leniency
//!
//! `elements` and `members` implement a deliberate policy, not incidental
//! error-swallowing: after a consumed `,`, a failed continuation unconsumes
//! the comma and the already-parsed prefix is returned as a *successful*
//! parse. Only the very first item is mandatory. `[1, 2, bad]` therefore
//! fails at the `]` check, but a bare elements scan of `1, 2, bad` succeeds
//! consuming exactly `1, 2`.

use super::ScanError;
use super::ScanResult;
use super::literal;
use super::number;
use super::string;
use super::whitespace::whitespace;
use crate::JsonErrorNote;
use crate::JsonParseErrorKind;

/// Consumes one value, dispatching on the first byte.
///
/// `{` starts an object, `[` an array, `"` a string, `t`/`f` a boolean,
/// `n` a null, and a digit or `-` a number. The selected alternative's
/// error propagates unchanged; a byte that starts no alternative fails
/// `Unsupported`.
pub fn value(buf: &[u8], depth: usize) -> ScanResult {
    let Some(depth) = depth.checked_sub(1) else {
        return Err(ScanError::new(JsonParseErrorKind::NestingTooDeep));
    };
    match buf.first() {
        None => Err(ScanError::new(JsonParseErrorKind::NothingToParse)),
        Some(b'{') => object(buf, depth),
        Some(b'[') => array(buf, depth),
        Some(b'"') => string::string(buf),
        Some(b't' | b'f') => literal::boolean(buf),
        Some(b'n') => literal::null(buf),
        Some(b'-' | b'0'..=b'9') => number::number(buf),
        Some(&b) => Err(ScanError::new(JsonParseErrorKind::Unsupported {
            found: b,
        })
        .with_note(JsonErrorNote::grammar("https://www.json.org/json-en.html"))),
    }
}

/// Consumes one element: `ws value ws`.
///
/// The unit consumed at the top level and between list separators.
pub fn element(buf: &[u8], depth: usize) -> ScanResult {
    let mut consumed = whitespace(buf);
    consumed += value(&buf[consumed..], depth).map_err(|e| e.rebase(consumed))?;
    consumed += whitespace(&buf[consumed..]);
    Ok(consumed)
}

/// Consumes an element list: `element (',' element)*`, lenient in its
/// tail.
///
/// The first element is mandatory and its failure propagates. After that,
/// each `,` is consumed only if another element follows successfully;
/// otherwise the comma is left unconsumed and the scan ends at the last
/// good element.
pub fn elements(buf: &[u8], depth: usize) -> ScanResult {
    let mut consumed = element(buf, depth)?;
    while buf.get(consumed) == Some(&b',') {
        match element(&buf[consumed + 1..], depth) {
            Ok(n) => consumed += 1 + n,
            Err(_) => break,
        }
    }
    Ok(consumed)
}

/// Consumes one object member: `ws string ws ':' element`.
///
/// A missing `:` after the key fails `InvalidMemberMissingSep`.
pub fn member(buf: &[u8], depth: usize) -> ScanResult {
    let mut consumed = whitespace(buf);
    consumed += string::string(&buf[consumed..]).map_err(|e| e.rebase(consumed))?;
    consumed += whitespace(&buf[consumed..]);
    match buf.get(consumed) {
        Some(b':') => consumed += 1,
        None => {
            return Err(ScanError::at(
                JsonParseErrorKind::NothingToParse,
                consumed,
            ));
        }
        Some(_) => {
            return Err(ScanError::at(
                JsonParseErrorKind::InvalidMemberMissingSep,
                consumed,
            ));
        }
    }
    consumed += element(&buf[consumed..], depth).map_err(|e| e.rebase(consumed))?;
    Ok(consumed)
}

/// Consumes a member list with the same lenient-tail policy as
/// [`elements`].
pub fn members(buf: &[u8], depth: usize) -> ScanResult {
    let mut consumed = member(buf, depth)?;
    while buf.get(consumed) == Some(&b',') {
        match member(&buf[consumed + 1..], depth) {
            Ok(n) => consumed += 1 + n,
            Err(_) => break,
        }
    }
    Ok(consumed)
}

/// Consumes an array: `'[' ws ']' | '[' elements ']'`.
///
/// After the open bracket, the scan first probes for an immediate close
/// (the empty-container case); otherwise that whitespace is unconsumed and
/// the interior is delegated to [`elements`], whose leading element
/// re-consumes it.
pub fn array(buf: &[u8], depth: usize) -> ScanResult {
    match buf.first() {
        None => return Err(ScanError::new(JsonParseErrorKind::NothingToParse)),
        Some(b'[') => {}
        Some(_) => return Err(ScanError::new(JsonParseErrorKind::InvalidArrayOpen)),
    }
    let ws = whitespace(&buf[1..]);
    if buf.get(1 + ws) == Some(&b']') {
        return Ok(2 + ws);
    }
    let consumed = 1 + elements(&buf[1..], depth).map_err(|e| e.rebase(1))?;
    match buf.get(consumed) {
        Some(b']') => Ok(consumed + 1),
        _ => Err(ScanError::at(JsonParseErrorKind::InvalidArrayClose, consumed)
            .with_note(JsonErrorNote::general_at("array opened here", 0))),
    }
}

/// Consumes an object: `'{' ws '}' | '{' members '}'`.
///
/// Same shape as [`array`] with members for the interior.
pub fn object(buf: &[u8], depth: usize) -> ScanResult {
    match buf.first() {
        None => return Err(ScanError::new(JsonParseErrorKind::NothingToParse)),
        Some(b'{') => {}
        Some(_) => return Err(ScanError::new(JsonParseErrorKind::InvalidObjectOpen)),
    }
    let ws = whitespace(&buf[1..]);
    if buf.get(1 + ws) == Some(&b'}') {
        return Ok(2 + ws);
    }
    let consumed = 1 + members(&buf[1..], depth).map_err(|e| e.rebase(1))?;
    match buf.get(consumed) {
        Some(b'}') => Ok(consumed + 1),
        _ => Err(ScanError::at(JsonParseErrorKind::InvalidObjectClose, consumed)
            .with_note(JsonErrorNote::general_at("object opened here", 0))),
    }
}
