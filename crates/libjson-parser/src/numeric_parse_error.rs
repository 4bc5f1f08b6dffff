/// Errors that occur when converting a span's bytes to a numeric value.
///
/// These errors occur on demand, when a caller asks a grammar-validated span
/// for a numeric representation it cannot take. For example, asking the
/// `Number` span `2.5e1` for an `i64`, or asking `-3` for a `u64`.
///
/// Conversion failure is always recoverable; a span that cannot convert is
/// still a valid parse result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericParseError {
    /// The span's bytes are not a valid signed integer literal.
    #[error("invalid integer literal: {0}")]
    Int(String),

    /// The span's bytes are not a valid unsigned integer literal.
    #[error("invalid unsigned integer literal: {0}")]
    Uint(String),

    /// The span's bytes are not a valid finite float literal.
    #[error("invalid float literal: {0}")]
    Float(String),
}
