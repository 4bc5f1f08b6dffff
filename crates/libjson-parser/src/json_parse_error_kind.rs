/// Categorizes parse errors for programmatic handling.
///
/// Each variant carries the minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `message` and `notes` fields of
/// [`JsonParseError`](crate::JsonParseError).
///
/// The `#[error(...)]` messages are concise/programmatic; full sentences are
/// in `JsonParseError.message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonParseErrorKind {
    /// Input was empty or exhausted where a mandatory construct was
    /// expected.
    ///
    /// # Example
    /// ```text
    /// {"a": [1, 2
    ///            ^ input ends mid-document
    /// ```
    #[error("nothing left to parse")]
    NothingToParse,

    /// A byte appeared that the current grammar rule cannot accept.
    ///
    /// # Example
    /// ```text
    /// --5
    ///  ^ second `-` after a consumed `-`
    /// ```
    #[error("unexpected character: 0x{found:02x}")]
    UnexpectedChar {
        /// The offending byte.
        found: u8,
    },

    /// A digit run was required but the next byte is not `0`-`9`.
    #[error("expected a digit")]
    InvalidDigit,

    /// The byte after `\` does not begin a valid escape sequence.
    ///
    /// Valid escapes are `\"`, `\\`, `\/`, `\b`, `\n`, `\r`, `\t`, and
    /// `\uXXXX` with exactly four hex digits.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// A code point outside the string-character range appeared inside a
    /// string.
    ///
    /// String characters must be in `U+0020..=U+10FFFF` and must not be a
    /// raw `"` or `\`.
    ///
    /// # Example
    /// ```text
    /// "a<TAB>b"
    ///   ^ raw control byte 0x09; write `\t` instead
    /// ```
    #[error("character out of range: 0x{found:02x}")]
    InvalidCharacter {
        /// The offending leading byte.
        found: u8,
    },

    /// Malformed UTF-8 inside a string.
    ///
    /// This also covers encodings of values beyond `U+10FFFF`, which are
    /// not representable as a single scalar value and are rejected by
    /// encoding validation rather than a range check.
    #[error("malformed character encoding")]
    InvalidCharacterEncoding,

    /// A string was expected but the opening `"` is missing.
    #[error("missing opening `\"`")]
    InvalidStringOpen,

    /// A string's closing `"` is missing.
    #[error("missing closing `\"`")]
    InvalidStringClose,

    /// An object was expected but the opening `{` is missing.
    #[error("missing opening `{{`")]
    InvalidObjectOpen,

    /// An object's closing `}` is missing.
    #[error("missing closing `}}`")]
    InvalidObjectClose,

    /// An array was expected but the opening `[` is missing.
    #[error("missing opening `[`")]
    InvalidArrayOpen,

    /// An array's closing `]` is missing.
    #[error("missing closing `]`")]
    InvalidArrayClose,

    /// An object member is missing the `:` between its key and value.
    ///
    /// # Example
    /// ```text
    /// {"a" 1}
    ///      ^ expected `:`
    /// ```
    #[error("missing `:` after member key")]
    InvalidMemberMissingSep,

    /// A `t`/`f` byte did not begin the literal `true` or `false`.
    ///
    /// Literal matches are case-sensitive with no partial matches.
    #[error("invalid boolean literal")]
    InvalidBoolean,

    /// An `n` byte did not begin the literal `null`.
    #[error("invalid null literal")]
    InvalidNull,

    /// The byte at a value position starts none of the six value
    /// alternatives (object, array, string, number, boolean, null).
    ///
    /// # Example
    /// ```text
    /// {"a": }
    ///       ^ `}` starts no value
    /// ```
    #[error("no value alternative matches: 0x{found:02x}")]
    Unsupported {
        /// The offending byte.
        found: u8,
    },

    /// Container nesting exceeded the configured depth ceiling.
    ///
    /// The grammar itself allows unbounded nesting; the ceiling converts
    /// what would otherwise be call-stack exhaustion into an ordinary
    /// error. See [`JsonParser::DEFAULT_MAX_DEPTH`](crate::JsonParser).
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,

    /// Bytes remain after one complete element and the parser was
    /// configured to reject trailing bytes.
    ///
    /// Only produced when
    /// [`JsonParser::reject_trailing_bytes`](crate::JsonParser) is set; by
    /// default trailing bytes are simply left unconsumed.
    #[error("trailing bytes after document")]
    UnconsumedTrailingBytes {
        /// How many bytes the valid leading element consumed.
        consumed: usize,
    },
}
