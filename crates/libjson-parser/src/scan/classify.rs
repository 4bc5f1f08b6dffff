//! Single-byte classifiers: the leaves of the scanner hierarchy.
//!
//! Pure, total functions over one byte. No allocation, no error.

/// Returns `true` for ASCII `0`-`9`.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Returns `true` for ASCII `1`-`9`.
///
/// The int grammar distinguishes `onenine` from `digit` to forbid leading
/// zeros on multi-digit numbers.
#[inline]
pub fn is_one_to_nine(byte: u8) -> bool {
    (b'1'..=b'9').contains(&byte)
}

/// Returns `true` for ASCII hex digits (`0`-`9`, `A`-`F`, `a`-`f`).
#[inline]
pub fn is_hex(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// Returns `true` for the four insignificant whitespace bytes: tab (0x09),
/// newline (0x0A), carriage return (0x0D), and space (0x20).
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b'\r' | b' ')
}
