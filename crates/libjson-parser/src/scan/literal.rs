//! Fixed-prefix literal scanners for `true`, `false`, and `null`.
//!
//! Matches are case-sensitive with no partial matches: `True` and `nul`
//! both fail.

use super::ScanError;
use super::ScanResult;
use crate::JsonParseErrorKind;

/// Consumes the literal `true` or `false`.
pub fn boolean(buf: &[u8]) -> ScanResult {
    if buf.starts_with(b"true") {
        Ok(4)
    } else if buf.starts_with(b"false") {
        Ok(5)
    } else if buf.is_empty() {
        Err(ScanError::new(JsonParseErrorKind::NothingToParse))
    } else {
        Err(ScanError::new(JsonParseErrorKind::InvalidBoolean))
    }
}

/// Consumes the literal `null`.
pub fn null(buf: &[u8]) -> ScanResult {
    if buf.starts_with(b"null") {
        Ok(4)
    } else if buf.is_empty() {
        Err(ScanError::new(JsonParseErrorKind::NothingToParse))
    } else {
        Err(ScanError::new(JsonParseErrorKind::InvalidNull))
    }
}
