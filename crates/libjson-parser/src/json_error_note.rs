use crate::JsonErrorNoteKind;
use crate::SmallVec;

/// An error note providing additional context about a parse error.
///
/// Notes augment the primary error message with explanatory context,
/// actionable suggestions, or related source locations (e.g., where an
/// unclosed container was opened).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonErrorNote {
    /// The kind of note (determines the rendering prefix).
    pub kind: JsonErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional byte offset pointing to a related location in the input.
    pub offset: Option<usize>,
}

impl JsonErrorNote {
    /// Creates a general note pointing to a byte offset.
    pub fn general_at(message: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: JsonErrorNoteKind::General,
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// Creates a help note without a location.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: JsonErrorNoteKind::Help,
            message: message.into(),
            offset: None,
        }
    }

    /// Creates a grammar reference note.
    pub fn grammar(url: impl Into<String>) -> Self {
        Self {
            kind: JsonErrorNoteKind::Grammar,
            message: url.into(),
            offset: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap allocation
/// in the common case.
pub type JsonErrorNotes = SmallVec<[JsonErrorNote; 2]>;
