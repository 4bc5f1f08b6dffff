use crate::JsonErrorNoteKind;
use crate::JsonErrorNotes;
use crate::JsonParseErrorKind;
use crate::scan::ScanError;

/// A parse error with location information and contextual notes.
///
/// This structure provides error information for both human-readable CLI
/// output and programmatic handling by tools. The location is an absolute
/// byte offset into the input buffer; line/column information is derived on
/// demand from the buffer when rendering, since the scanners themselves
/// never track lines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct JsonParseError {
    /// Human-readable primary error message.
    message: String,

    /// Absolute byte offset where the error was detected.
    offset: usize,

    /// Categorized error kind for programmatic handling.
    kind: JsonParseErrorKind,

    /// Additional notes providing context, suggestions, and related
    /// locations.
    notes: JsonErrorNotes,
}

impl JsonParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        offset: usize,
        kind: JsonParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            offset,
            kind,
            notes: JsonErrorNotes::new(),
        }
    }

    /// Creates a parse error from a scanner error whose offsets have
    /// already been rebased to be absolute.
    pub(crate) fn from_scan_error(error: ScanError) -> Self {
        Self {
            message: Self::message_for(&error.kind),
            offset: error.offset,
            kind: error.kind,
            notes: error.notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the absolute byte offset where the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &JsonParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &JsonErrorNotes {
        &self.notes
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// byte 6: error: `}` starts no JSON value
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("byte {}: error: {}", self.offset, self.message)
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: `}` starts no JSON value
    ///   --> <input>:1:7
    ///    |
    ///  1 | {"a": }
    ///    |       ^
    ///    |
    ///    = note: object opened here (byte 0)
    /// ```
    ///
    /// # Arguments
    /// - `source`: Optional input buffer for snippet extraction. If `None`,
    ///   snippets are omitted but the byte offset is still shown.
    pub fn format_detailed(&self, source: Option<&[u8]>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        match source {
            Some(src) => {
                let (line, col) = line_and_byte_col(src, self.offset);
                output.push_str(&format!("  --> <input>:{}:{}\n", line + 1, col + 1));
                if let Some(snippet) = format_source_snippet(src, self.offset) {
                    output.push_str(&snippet);
                }
            }
            None => {
                output.push_str(&format!("  --> <input> (byte {})\n", self.offset));
            }
        }

        for note in &self.notes {
            let prefix = match note.kind {
                JsonErrorNoteKind::General => "note",
                JsonErrorNoteKind::Help => "help",
                JsonErrorNoteKind::Grammar => "grammar",
            };
            match note.offset {
                Some(offset) => {
                    output.push_str(&format!(
                        "   = {prefix}: {} (byte {offset})\n",
                        note.message,
                    ));
                    if let Some(src) = source
                        && let Some(snippet) = format_source_snippet(src, offset)
                    {
                        output.push_str(&snippet);
                    }
                }
                None => {
                    output.push_str(&format!("   = {prefix}: {}\n", note.message));
                }
            }
        }

        output
    }

    /// Expands an error kind into the full human-readable sentence used as
    /// the primary message.
    fn message_for(kind: &JsonParseErrorKind) -> String {
        match kind {
            JsonParseErrorKind::NothingToParse => {
                "input ended while a construct was still expected".to_string()
            }
            JsonParseErrorKind::UnexpectedChar { found } => {
                format!("unexpected character {}", display_byte(*found))
            }
            JsonParseErrorKind::InvalidDigit => {
                "expected a digit (`0`-`9`)".to_string()
            }
            JsonParseErrorKind::InvalidEscape => {
                "invalid string escape sequence".to_string()
            }
            JsonParseErrorKind::InvalidCharacter { found } => format!(
                "character {} is not allowed inside a string",
                display_byte(*found),
            ),
            JsonParseErrorKind::InvalidCharacterEncoding => {
                "string contains malformed UTF-8".to_string()
            }
            JsonParseErrorKind::InvalidStringOpen => {
                "expected a string, but found no opening `\"`".to_string()
            }
            JsonParseErrorKind::InvalidStringClose => {
                "string is missing its closing `\"`".to_string()
            }
            JsonParseErrorKind::InvalidObjectOpen => {
                "expected an object, but found no opening `{`".to_string()
            }
            JsonParseErrorKind::InvalidObjectClose => {
                "object is missing its closing `}`".to_string()
            }
            JsonParseErrorKind::InvalidArrayOpen => {
                "expected an array, but found no opening `[`".to_string()
            }
            JsonParseErrorKind::InvalidArrayClose => {
                "array is missing its closing `]`".to_string()
            }
            JsonParseErrorKind::InvalidMemberMissingSep => {
                "expected `:` after object member key".to_string()
            }
            JsonParseErrorKind::InvalidBoolean => {
                "expected the literal `true` or `false`".to_string()
            }
            JsonParseErrorKind::InvalidNull => {
                "expected the literal `null`".to_string()
            }
            JsonParseErrorKind::Unsupported { found } => format!(
                "{} starts no JSON value",
                display_byte(*found),
            ),
            JsonParseErrorKind::NestingTooDeep => {
                "maximum nesting depth exceeded".to_string()
            }
            JsonParseErrorKind::UnconsumedTrailingBytes { consumed } => format!(
                "trailing bytes after a complete document ({consumed} bytes consumed)",
            ),
        }
    }
}

/// Renders a byte for error messages: printable ASCII in backticks,
/// everything else as hex.
fn display_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("`{}`", byte as char)
    } else {
        format!("0x{byte:02x}")
    }
}

/// Computes the 0-based line and byte-column of `offset` within `source`.
fn line_and_byte_col(source: &[u8], offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 0;
    let mut line_start = 0;
    for (i, &b) in source[..offset].iter().enumerate() {
        if b == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, offset - line_start)
}

/// Formats a caret snippet pointing at `offset` within `source`.
///
/// Returns `None` when the surrounding line is not printable as text
/// (malformed UTF-8 lines are skipped rather than mangled).
fn format_source_snippet(source: &[u8], offset: usize) -> Option<String> {
    let offset = offset.min(source.len());
    let line_start = source[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let line_end = source[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| offset + i)
        .unwrap_or(source.len());
    let line_content = std::str::from_utf8(&source[line_start..line_end]).ok()?;

    let (line, col) = line_and_byte_col(source, offset);
    let display_line_num = line + 1;
    let line_num_width = display_line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{display_line_num:>line_num_width$} | {line_content}\n"
    ));
    output.push_str(&format!(
        "{:>width$} | {:>padding$}^\n",
        "",
        "",
        width = line_num_width,
        padding = col,
    ));

    Some(output)
}
