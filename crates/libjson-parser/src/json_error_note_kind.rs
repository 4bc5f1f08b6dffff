/// The kind of an error note (determines how the note is rendered).
///
/// Notes provide additional context beyond the primary error message.
/// Different kinds are rendered with different prefixes in CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonErrorNoteKind {
    /// General context about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    /// Example: "array opened here" (with an offset pointing to the `[`)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    /// Example: "string escapes must be one of `\" \\ / b n r t u`"
    Help,

    /// Reference to the JSON grammar.
    ///
    /// Rendered as `= grammar: ...` in CLI output.
    /// Example: "https://www.json.org/json-en.html"
    Grammar,
}
