use std::fmt;

/// The six JSON value categories.
///
/// This is the coarse classification a caller sees on a successfully parsed
/// value. The finer grammar-production tags live in
/// [`JsonSpanKind`](crate::JsonSpanKind).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum JsonType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl JsonType {
    /// Classifies a value by its first byte, mirroring the lookahead
    /// dispatch the value scanner performs.
    ///
    /// Returns `None` for a byte that starts no JSON value alternative.
    pub fn of_leading_byte(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Self::Object),
            b'[' => Some(Self::Array),
            b'"' => Some(Self::String),
            b'-' | b'0'..=b'9' => Some(Self::Number),
            b't' | b'f' => Some(Self::Boolean),
            b'n' => Some(Self::Null),
            _ => None,
        }
    }

    /// Returns a lowercase display name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
