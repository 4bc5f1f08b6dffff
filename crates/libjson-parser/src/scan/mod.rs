//! The recursive-descent scanner hierarchy.
//!
//! One pure function per json.org grammar production, organized
//! leaves-first: byte classifiers, terminal scanners (whitespace, sign,
//! escape, character), literal scanners (boolean, null), composite scanners
//! (digits, int, frac, exp, number, string), and the recursive structural
//! scanners (element, elements, member, members, array, object, value).
//!
//! Every scanner takes a byte slice positioned at the start of the
//! construct it recognizes and returns how many leading bytes it consumed.
//! Optional productions return `usize` directly (zero means the empty
//! match); mandatory productions return [`ScanResult`] and fail instead of
//! ever succeeding with zero bytes.
//!
//! Error offsets are relative to the slice the failing scanner was given;
//! each caller rebases them on the way out, so the entry point reports
//! absolute positions.

mod classify;
mod literal;
mod number;
mod string;
mod structure;
mod whitespace;

pub use classify::is_digit;
pub use classify::is_hex;
pub use classify::is_one_to_nine;
pub use classify::is_whitespace;
pub use literal::boolean;
pub use literal::null;
pub use number::digits;
pub use number::exp;
pub use number::frac;
pub use number::int;
pub use number::number;
pub use number::sign;
pub use string::character;
pub use string::characters;
pub use string::escape;
pub use string::string;
pub use structure::array;
pub use structure::element;
pub use structure::elements;
pub use structure::member;
pub use structure::members;
pub use structure::object;
pub use structure::value;
pub use whitespace::whitespace;

use crate::JsonErrorNote;
use crate::JsonErrorNotes;
use crate::JsonParseErrorKind;

/// A scanner failure: an error kind positioned relative to the slice the
/// failing scanner was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    /// What went wrong.
    pub kind: JsonParseErrorKind,

    /// Byte offset of the failure, relative to the slice handed to the
    /// scanner that produced this error. Absolute once fully rebased.
    pub offset: usize,

    /// Contextual notes (e.g. where an unclosed container was opened).
    /// Note offsets follow the same rebasing as `offset`.
    pub notes: JsonErrorNotes,
}

impl ScanError {
    pub(crate) fn new(kind: JsonParseErrorKind) -> Self {
        Self {
            kind,
            offset: 0,
            notes: JsonErrorNotes::new(),
        }
    }

    pub(crate) fn at(kind: JsonParseErrorKind, offset: usize) -> Self {
        Self {
            kind,
            offset,
            notes: JsonErrorNotes::new(),
        }
    }

    pub(crate) fn with_note(mut self, note: JsonErrorNote) -> Self {
        self.notes.push(note);
        self
    }

    /// Shifts this error (and its notes) `base` bytes to the right, moving
    /// it from a sub-slice's coordinates into the caller's.
    pub(crate) fn rebase(mut self, base: usize) -> Self {
        self.offset += base;
        for note in &mut self.notes {
            if let Some(offset) = &mut note.offset {
                *offset += base;
            }
        }
        self
    }
}

/// Result of a mandatory scanner: leading bytes consumed, or a positioned
/// failure.
pub type ScanResult = Result<usize, ScanError>;
