/// Compact byte-offset span. 8 bytes per span.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// input buffer. Both offsets are 0-based.
///
/// `u32` offsets support documents up to 4 GiB, which comfortably covers any
/// JSON document a recognizer of this kind should be asked to swallow whole.
///
/// `#[repr(C)]` ensures a predictable memory layout for FFI.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[repr(C)]
pub struct ByteSpan {
    /// Byte offset of the first byte of this span in the input buffer
    /// (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of this span in the input buffer
    /// (0-based, exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the bytes this span covers within `source`.
    ///
    /// Returns `None` if the span does not lie within `source`.
    pub fn slice<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        source.get(self.start as usize..self.end as usize)
    }
}
