//! A JSON recognizer that reports how many bytes of valid JSON a buffer
//! starts with, and gives typed access to the recognized sub-constructs.
//!
//! This crate never builds a document tree. Every successfully parsed
//! construct is a [`JsonSpan`]: a grammar-kind tag plus a borrowed view into
//! the original input buffer. Sub-structure (array items, object members,
//! the int/frac/exp parts of a number) is re-derived on demand by re-running
//! the relevant scanner over a captured span, which keeps parsing itself
//! allocation-free.

mod byte_span;
mod element_iter;
mod json_element;
mod json_error_note;
mod json_error_note_kind;
mod json_member;
mod json_parse_error;
mod json_parse_error_kind;
mod json_parser;
mod json_span;
mod json_span_kind;
mod json_type;
mod json_value;
mod member_iter;
mod numeric_parse_error;
pub mod scan;

pub use byte_span::ByteSpan;
pub use element_iter::ElementIter;
pub use json_element::JsonElement;
pub use json_error_note::JsonErrorNote;
pub use json_error_note::JsonErrorNotes;
pub use json_error_note_kind::JsonErrorNoteKind;
pub use json_member::JsonMember;
pub use json_parse_error::JsonParseError;
pub use json_parse_error_kind::JsonParseErrorKind;
pub use json_parser::JsonParser;
pub use json_span::JsonSpan;
pub use json_span_kind::JsonSpanKind;
pub use json_type::JsonType;
pub use json_value::JsonValue;
pub use member_iter::MemberIter;
pub use numeric_parse_error::NumericParseError;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;

#[cfg(test)]
mod tests;
