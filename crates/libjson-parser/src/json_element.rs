use crate::JsonSpan;
use crate::JsonSpanKind;
use crate::JsonType;
use crate::JsonValue;
use crate::scan;

/// One `ws value ws` unit: the grammar's top-level construct, also the item
/// shape inside arrays.
///
/// The element span includes the surrounding whitespace; the inner
/// [`JsonValue`] span does not.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JsonElement<'src> {
    span: JsonSpan<'src>,
    value: JsonValue<'src>,
}

impl<'src> JsonElement<'src> {
    pub(crate) fn new(span: JsonSpan<'src>, value: JsonValue<'src>) -> Self {
        Self { span, value }
    }

    /// Re-derives an element from bytes a structural scanner already
    /// certified as exactly one element.
    ///
    /// Returns `None` if the bytes are not a complete element, which cannot
    /// happen for spans produced by this crate's own parse.
    pub(crate) fn from_certified(bytes: &'src [u8], offset: usize) -> Option<Self> {
        let lead = scan::whitespace(bytes);
        let value_len = scan::value(&bytes[lead..], usize::MAX).ok()?;
        let value_bytes = &bytes[lead..lead + value_len];
        let json_type = JsonType::of_leading_byte(*value_bytes.first()?)?;
        Some(Self {
            span: JsonSpan::new(JsonSpanKind::Element, bytes, offset),
            value: JsonValue::new(
                json_type,
                JsonSpan::new(json_type.into(), value_bytes, offset + lead),
            ),
        })
    }

    /// Returns the full element span, whitespace included.
    pub fn span(&self) -> JsonSpan<'src> {
        self.span
    }

    /// Returns how many bytes of the input buffer this element consumed.
    pub fn consumed_len(&self) -> usize {
        self.span.len()
    }

    /// Returns the value inside this element's whitespace.
    pub fn value(&self) -> &JsonValue<'src> {
        &self.value
    }
}
