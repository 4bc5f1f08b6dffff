//! The string grammar: `'"' characters '"'`, with escape and UTF-8
//! validation.
//!
//! Escapes are validated but preserved verbatim: a span for `"a\nb"` keeps
//! the two escape bytes, it does not decode them to a newline. This is the
//! hottest path in the parser, so [`characters`] scans with a `memchr` fast
//! path instead of decoding one code point at a time.

use super::ScanError;
use super::ScanResult;
use super::classify::is_hex;
use crate::JsonErrorNote;
use crate::JsonParseErrorKind;

/// Consumes one escape body: the bytes after a `\`.
///
/// Accepts exactly one of `" \ / b n r t`, or `u` followed by exactly four
/// hex digits. Anything else is `InvalidEscape`.
pub fn escape(buf: &[u8]) -> ScanResult {
    match buf.first() {
        None => Err(ScanError::new(JsonParseErrorKind::NothingToParse)),
        Some(b'"' | b'\\' | b'/' | b'b' | b'n' | b'r' | b't') => Ok(1),
        Some(b'u') => {
            for (i, &b) in buf.iter().enumerate().skip(1).take(4) {
                if !is_hex(b) {
                    return Err(
                        ScanError::at(JsonParseErrorKind::InvalidEscape, i)
                            .with_note(JsonErrorNote::help(
                                "`\\u` must be followed by exactly four hex digits",
                            )),
                    );
                }
            }
            if buf.len() < 5 {
                return Err(ScanError::at(
                    JsonParseErrorKind::NothingToParse,
                    buf.len(),
                ));
            }
            Ok(5)
        }
        Some(_) => Err(ScanError::new(JsonParseErrorKind::InvalidEscape)
            .with_note(JsonErrorNote::help(
                r#"string escapes must be one of `" \ / b n r t u`"#,
            ))),
    }
}

/// Consumes one grammar character.
///
/// A character is either a `\` followed by a valid escape (consuming
/// `1 + escape_len` bytes), or a single decoded code point in
/// `U+0020..=U+10FFFF` that is not `"` or `\`, consuming its encoded byte
/// width. Malformed UTF-8 fails `InvalidCharacterEncoding`; values beyond
/// `U+10FFFF` are unencodable and are caught the same way, never by the
/// range check.
pub fn character(buf: &[u8]) -> ScanResult {
    let Some(&first) = buf.first() else {
        return Err(ScanError::new(JsonParseErrorKind::NothingToParse));
    };
    match first {
        b'\\' => {
            let escape_len = escape(&buf[1..]).map_err(|e| e.rebase(1))?;
            Ok(1 + escape_len)
        }
        b'"' => Err(ScanError::new(JsonParseErrorKind::UnexpectedChar {
            found: b'"',
        })),
        0x00..=0x1f => Err(ScanError::new(JsonParseErrorKind::InvalidCharacter {
            found: first,
        })),
        0x20..=0x7f => Ok(1),
        _ => {
            // Multi-byte sequence: decode just the first code point.
            let prefix = &buf[..buf.len().min(4)];
            let valid_len = match std::str::from_utf8(prefix) {
                Ok(_) => prefix.len(),
                Err(e) => e.valid_up_to(),
            };
            std::str::from_utf8(&prefix[..valid_len])
                .ok()
                .and_then(|s| s.chars().next())
                .map(|ch| ch.len_utf8())
                .ok_or_else(|| {
                    ScanError::new(JsonParseErrorKind::InvalidCharacterEncoding)
                })
        }
    }
}

/// Greedily repeats [`character`].
///
/// Stops (without error) at the first non-matching position, including
/// normal termination at a closing quote. Never fails itself.
///
/// Uses `memchr2` to hop directly to the next `"` or `\` and validates the
/// skipped chunk in bulk: one UTF-8 check plus a control-byte scan, instead
/// of a per-code-point decode. Accept/reject behavior is identical to
/// repeating [`character`] byte by byte.
pub fn characters(buf: &[u8]) -> usize {
    let mut consumed = 0;
    while consumed < buf.len() {
        let rest = &buf[consumed..];
        match memchr::memchr2(b'"', b'\\', rest) {
            Some(0) => {
                if rest[0] == b'"' {
                    break;
                }
                match character(rest) {
                    Ok(n) => consumed += n,
                    Err(_) => return consumed,
                }
            }
            hop => {
                let chunk_len = hop.unwrap_or(rest.len());
                let valid = valid_chunk_prefix(&rest[..chunk_len]);
                consumed += valid;
                if valid < chunk_len || hop.is_none() {
                    return consumed;
                }
            }
        }
    }
    consumed
}

/// Returns the length of the longest prefix of `chunk` consisting entirely
/// of valid unescaped string characters.
///
/// `chunk` is known to contain no `"` or `\`, so only UTF-8 validity and
/// the control-character floor can cut the run short. Control bytes are
/// ASCII, so a plain byte scan over the UTF-8-valid region finds them.
fn valid_chunk_prefix(chunk: &[u8]) -> usize {
    let valid_len = match std::str::from_utf8(chunk) {
        Ok(_) => chunk.len(),
        Err(e) => e.valid_up_to(),
    };
    chunk[..valid_len]
        .iter()
        .position(|&b| b < 0x20)
        .unwrap_or(valid_len)
}

/// Consumes a complete string: `'"' characters '"'`.
///
/// A missing opening quote is `InvalidStringOpen`; running out of input
/// mid-string is `NothingToParse`. When [`characters`] stops before the
/// closing quote, re-running the single-character rule at the stop position
/// surfaces the precise failure (bad escape, control byte, malformed
/// encoding), which propagates unchanged.
pub fn string(buf: &[u8]) -> ScanResult {
    match buf.first() {
        None => return Err(ScanError::new(JsonParseErrorKind::NothingToParse)),
        Some(b'"') => {}
        Some(_) => return Err(ScanError::new(JsonParseErrorKind::InvalidStringOpen)),
    }
    let consumed = 1 + characters(&buf[1..]);
    match buf.get(consumed) {
        Some(b'"') => Ok(consumed + 1),
        None => Err(ScanError::at(JsonParseErrorKind::NothingToParse, consumed)),
        Some(_) => match character(&buf[consumed..]) {
            Err(e) => Err(e.rebase(consumed)),
            Ok(_) => Err(ScanError::at(
                JsonParseErrorKind::InvalidStringClose,
                consumed,
            )),
        },
    }
}
