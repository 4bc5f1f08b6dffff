use crate::JsonElement;
use crate::JsonParseError;
use crate::JsonParseErrorKind;
use crate::JsonSpan;
use crate::JsonSpanKind;
use crate::JsonType;
use crate::JsonValue;
use crate::scan;

/// Recognizes the longest valid JSON element at the start of a byte buffer.
///
/// The parser is a thin configuration layer over the scanners in
/// [`scan`]: it owns the depth budget and the trailing-bytes policy, runs
/// the top-level `ws value ws` rule, and packages the result as a typed
/// [`JsonElement`] borrowing from the input.
///
/// # Example
/// ```
/// use libjson_parser::JsonParser;
/// use libjson_parser::JsonType;
///
/// let parser = JsonParser::new(r#"{"enabled": true}"#);
/// let element = parser.parse().unwrap();
/// assert_eq!(element.value().json_type(), JsonType::Object);
/// assert_eq!(element.consumed_len(), 17);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct JsonParser<'src> {
    source: &'src [u8],
    max_depth: usize,
    reject_trailing_bytes: bool,
}

impl<'src> JsonParser<'src> {
    /// Default maximum nesting depth for [`parse`](Self::parse).
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Creates a parser over `source` with the default depth budget and
    /// prefix-matching behavior (trailing bytes are ignored).
    pub fn new<B: AsRef<[u8]> + ?Sized>(source: &'src B) -> Self {
        Self {
            source: source.as_ref(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
            reject_trailing_bytes: false,
        }
    }

    /// Overrides the maximum nesting depth.
    ///
    /// Each array or object level consumes one unit of depth; exceeding the
    /// budget fails the parse with
    /// [`JsonParseErrorKind::NestingTooDeep`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Requires the element to consume the entire buffer.
    ///
    /// By default the parser matches a prefix and ignores whatever follows
    /// it. With this set, unconsumed bytes fail the parse with
    /// [`JsonParseErrorKind::UnconsumedTrailingBytes`].
    pub fn reject_trailing_bytes(mut self) -> Self {
        self.reject_trailing_bytes = true;
        self
    }

    /// Parses one element (`ws value ws`) from the start of the buffer.
    ///
    /// On success the returned [`JsonElement`] records exactly how many
    /// bytes were consumed; error offsets are absolute positions in the
    /// buffer.
    pub fn parse(&self) -> Result<JsonElement<'src>, JsonParseError> {
        let lead = scan::whitespace(self.source);
        let value_len = scan::value(&self.source[lead..], self.max_depth)
            .map_err(|error| JsonParseError::from_scan_error(error.rebase(lead)))?;
        let value_bytes = &self.source[lead..lead + value_len];

        let mut consumed = lead + value_len;
        consumed += scan::whitespace(&self.source[consumed..]);

        if self.reject_trailing_bytes && consumed < self.source.len() {
            return Err(JsonParseError::new(
                format!(
                    "trailing bytes after a complete document \
                     ({consumed} bytes consumed)",
                ),
                consumed,
                JsonParseErrorKind::UnconsumedTrailingBytes { consumed },
            ));
        }

        // scan::value only succeeds on bytes its dispatch recognizes, so
        // the leading byte always classifies.
        let found = value_bytes[0];
        let Some(json_type) = JsonType::of_leading_byte(found) else {
            return Err(JsonParseError::new(
                format!("`{}` starts no JSON value", found as char),
                lead,
                JsonParseErrorKind::Unsupported { found },
            ));
        };

        Ok(JsonElement::new(
            JsonSpan::new(JsonSpanKind::Element, &self.source[..consumed], 0),
            JsonValue::new(
                json_type,
                JsonSpan::new(json_type.into(), value_bytes, lead),
            ),
        ))
    }
}
