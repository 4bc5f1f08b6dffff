use crate::ElementIter;
use crate::JsonSpan;
use crate::JsonSpanKind;
use crate::JsonType;
use crate::MemberIter;
use crate::NumericParseError;
use crate::scan;

/// A successfully parsed value: a category tag plus the span the value's
/// grammar rule certified.
///
/// No child nodes are materialized. Containers are decomposed on demand by
/// [`elements`](Self::elements) and [`members`](Self::members), which
/// re-run the scanners over the captured span; numbers are decomposed by
/// [`int_span`](Self::int_span) and friends. Re-deriving sub-structure this
/// way is cheaper than building and freeing a node graph for inputs that
/// may only ever be validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JsonValue<'src> {
    json_type: JsonType,
    span: JsonSpan<'src>,
}

impl<'src> JsonValue<'src> {
    pub(crate) fn new(json_type: JsonType, span: JsonSpan<'src>) -> Self {
        Self { json_type, span }
    }

    /// Returns this value's category.
    pub fn json_type(&self) -> JsonType {
        self.json_type
    }

    /// Returns the span this value's grammar rule certified.
    pub fn span(&self) -> JsonSpan<'src> {
        self.span
    }

    /// Returns the certified bytes, borrowed from the input buffer.
    pub fn as_bytes(&self) -> &'src [u8] {
        self.span.as_bytes()
    }

    // =========================================================================
    // Container decomposition
    // =========================================================================

    /// Iterates the elements of an `Array` value.
    ///
    /// Returns `None` for non-array values. Iteration re-scans the array's
    /// interior; it allocates nothing and cannot fail, since the span was
    /// certified when it was parsed.
    pub fn elements(&self) -> Option<ElementIter<'src>> {
        if self.json_type != JsonType::Array {
            return None;
        }
        let bytes = self.span.as_bytes();
        let interior = &bytes[1..bytes.len() - 1];
        Some(ElementIter::new(interior, self.span.offset() + 1))
    }

    /// Iterates the members of an `Object` value.
    ///
    /// Returns `None` for non-object values.
    pub fn members(&self) -> Option<MemberIter<'src>> {
        if self.json_type != JsonType::Object {
            return None;
        }
        let bytes = self.span.as_bytes();
        let interior = &bytes[1..bytes.len() - 1];
        Some(MemberIter::new(interior, self.span.offset() + 1))
    }

    // =========================================================================
    // Scalar accessors
    // =========================================================================

    /// Returns the interior of a `String` value, without the delimiting
    /// quotes.
    ///
    /// Escape sequences are preserved verbatim, exactly as they appear in
    /// the input; `"a\nb"` yields the four bytes `a \ n b`.
    pub fn string_bytes(&self) -> Option<&'src [u8]> {
        if self.json_type != JsonType::String {
            return None;
        }
        let bytes = self.span.as_bytes();
        Some(&bytes[1..bytes.len() - 1])
    }

    /// Returns the value of a `Boolean`, or `None` for other categories.
    pub fn as_bool(&self) -> Option<bool> {
        if self.json_type != JsonType::Boolean {
            return None;
        }
        Some(self.span.as_bytes() == b"true")
    }

    /// Returns `true` if this value is the `null` literal.
    pub fn is_null(&self) -> bool {
        self.json_type == JsonType::Null
    }

    // =========================================================================
    // Number decomposition
    // =========================================================================

    /// Returns the `Int` part of a `Number` value (sign included).
    ///
    /// Returns `None` for non-number values.
    pub fn int_span(&self) -> Option<JsonSpan<'src>> {
        if self.json_type != JsonType::Number {
            return None;
        }
        let bytes = self.span.as_bytes();
        let int_len = scan::int(bytes).ok()?;
        Some(JsonSpan::new(
            JsonSpanKind::Int,
            &bytes[..int_len],
            self.span.offset(),
        ))
    }

    /// Returns the `Frac` part of a `Number` value.
    ///
    /// The span is zero-length when the numeral has no fraction; that is
    /// the grammar's empty production, not an error.
    pub fn frac_span(&self) -> Option<JsonSpan<'src>> {
        if self.json_type != JsonType::Number {
            return None;
        }
        let bytes = self.span.as_bytes();
        let int_len = scan::int(bytes).ok()?;
        let frac_len = scan::frac(&bytes[int_len..]);
        Some(JsonSpan::new(
            JsonSpanKind::Frac,
            &bytes[int_len..int_len + frac_len],
            self.span.offset() + int_len,
        ))
    }

    /// Returns the `Exp` part of a `Number` value.
    ///
    /// Zero-length when the numeral has no exponent, like
    /// [`frac_span`](Self::frac_span).
    pub fn exp_span(&self) -> Option<JsonSpan<'src>> {
        if self.json_type != JsonType::Number {
            return None;
        }
        let bytes = self.span.as_bytes();
        let int_len = scan::int(bytes).ok()?;
        let frac_len = scan::frac(&bytes[int_len..]);
        let start = int_len + frac_len;
        let exp_len = scan::exp(&bytes[start..]);
        Some(JsonSpan::new(
            JsonSpanKind::Exp,
            &bytes[start..start + exp_len],
            self.span.offset() + start,
        ))
    }

    // =========================================================================
    // Numeric conversion
    // =========================================================================

    /// Converts a `Number` value to `i64`. See
    /// [`JsonSpan::parse_i64`].
    pub fn parse_i64(&self) -> Result<i64, NumericParseError> {
        self.span.parse_i64()
    }

    /// Converts a `Number` value to `u64`. See
    /// [`JsonSpan::parse_u64`].
    pub fn parse_u64(&self) -> Result<u64, NumericParseError> {
        self.span.parse_u64()
    }

    /// Converts a `Number` value to `f64`. See
    /// [`JsonSpan::parse_f64`].
    pub fn parse_f64(&self) -> Result<f64, NumericParseError> {
        self.span.parse_f64()
    }
}
