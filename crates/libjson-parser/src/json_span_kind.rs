use crate::JsonType;

/// The grammar production that certified a [`JsonSpan`](crate::JsonSpan).
///
/// One variant per json.org grammar rule that produces a span. The optional
/// productions (`Whitespace`, `Sign`, `Frac`, `Exp`) may legally tag a
/// zero-length span; the mandatory ones never do.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum JsonSpanKind {
    // Terminal productions
    Whitespace,
    Sign,
    Escape,
    Character,

    // Numeric grammar
    Digits,
    Int,
    Frac,
    Exp,
    Number,

    // Literals
    Boolean,
    Null,

    // Strings
    String,

    // Structural productions
    Object,
    Array,
    Member,
    Members,
    Element,
    Elements,
}

impl From<JsonType> for JsonSpanKind {
    fn from(json_type: JsonType) -> Self {
        match json_type {
            JsonType::Object => Self::Object,
            JsonType::Array => Self::Array,
            JsonType::String => Self::String,
            JsonType::Number => Self::Number,
            JsonType::Boolean => Self::Boolean,
            JsonType::Null => Self::Null,
        }
    }
}
