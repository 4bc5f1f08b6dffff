use crate::ByteSpan;
use crate::JsonSpanKind;
use crate::NumericParseError;
use std::str::Utf8Error;

/// A tagged, borrowed view into the input buffer identifying the bytes a
/// grammar rule certified as valid.
///
/// Spans have no independent ownership: the `'src` lifetime ties every span
/// to the buffer it was parsed from, and a span can never outlive it.
///
/// # Invariants
///
/// - The byte range is a subrange of the original buffer, beginning at the
///   offset the scanner was handed.
/// - The bytes are exactly what the tagging grammar rule accepted; a
///   `String` span begins and ends on its delimiting quotes, a `Number`
///   span contains a complete numeral, and so on.
/// - Optional productions (whitespace, sign, frac, exp) may produce a
///   zero-length span; mandatory productions never do.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JsonSpan<'src> {
    kind: JsonSpanKind,
    bytes: &'src [u8],
    /// Absolute offset of `bytes[0]` within the original input buffer.
    offset: usize,
}

impl<'src> JsonSpan<'src> {
    pub(crate) fn new(kind: JsonSpanKind, bytes: &'src [u8], offset: usize) -> Self {
        Self {
            kind,
            bytes,
            offset,
        }
    }

    /// Returns the grammar production that certified this span.
    pub fn kind(&self) -> JsonSpanKind {
        self.kind
    }

    /// Returns the certified bytes, borrowed from the input buffer.
    pub fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }

    /// Returns the absolute byte offset of this span within the input
    /// buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if this span has zero length.
    ///
    /// Only the optional grammar productions can produce an empty span.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Extracts a compact [`ByteSpan`] from this span's offsets, discarding
    /// the borrowed bytes and kind tag.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan {
            start: self.offset as u32,
            end: (self.offset + self.bytes.len()) as u32,
        }
    }

    /// Returns the certified bytes as a `&str`.
    ///
    /// Every scanner validates UTF-8 for the bytes it certifies, so this
    /// only fails on a span that was constructed from a different buffer
    /// than it claims to borrow from.
    pub fn to_str(&self) -> Result<&'src str, Utf8Error> {
        std::str::from_utf8(self.bytes)
    }

    /// Converts this span's bytes to a signed 64-bit integer.
    ///
    /// Fails with a recoverable [`NumericParseError`] when the bytes are not
    /// a valid base-10 integer numeral (e.g. a `Number` span with a fraction
    /// or exponent part).
    pub fn parse_i64(&self) -> Result<i64, NumericParseError> {
        let text = self
            .to_str()
            .map_err(|_| NumericParseError::Int("not valid UTF-8".to_string()))?;
        text.parse::<i64>()
            .map_err(|e| NumericParseError::Int(format!("`{text}`: {e}")))
    }

    /// Converts this span's bytes to an unsigned 64-bit integer.
    ///
    /// Fails with a recoverable [`NumericParseError`] when the bytes are
    /// negative or otherwise not a valid base-10 unsigned numeral.
    pub fn parse_u64(&self) -> Result<u64, NumericParseError> {
        let text = self
            .to_str()
            .map_err(|_| NumericParseError::Uint("not valid UTF-8".to_string()))?;
        text.parse::<u64>()
            .map_err(|e| NumericParseError::Uint(format!("`{text}`: {e}")))
    }

    /// Converts this span's bytes to a 64-bit float.
    ///
    /// Accepts any complete JSON numeral (int, fraction, exponent). Fails
    /// with a recoverable [`NumericParseError`] when the bytes do not form a
    /// float literal, or when the value overflows to a non-finite float.
    pub fn parse_f64(&self) -> Result<f64, NumericParseError> {
        let text = self
            .to_str()
            .map_err(|_| NumericParseError::Float("not valid UTF-8".to_string()))?;
        let value = text
            .parse::<f64>()
            .map_err(|e| NumericParseError::Float(format!("`{text}`: {e}")))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumericParseError::Float(format!("`{text}`: not finite")))
        }
    }
}
