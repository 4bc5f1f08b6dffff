use crate::JsonElement;
use crate::scan;

/// Iterator over the elements of an array's interior.
///
/// Re-derives each element by re-running the element scanner over the
/// certified span, so iteration allocates nothing. Commas between elements
/// are consumed by the iterator itself.
#[derive(Clone, Debug)]
pub struct ElementIter<'src> {
    /// Unvisited interior bytes (between `[` and `]`, commas included).
    rest: &'src [u8],
    /// Absolute offset of `rest[0]` in the input buffer.
    offset: usize,
    finished: bool,
}

impl<'src> ElementIter<'src> {
    pub(crate) fn new(interior: &'src [u8], offset: usize) -> Self {
        Self {
            rest: interior,
            offset,
            finished: false,
        }
    }
}

impl<'src> Iterator for ElementIter<'src> {
    type Item = JsonElement<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        // An empty container's interior is whitespace only.
        if scan::whitespace(self.rest) == self.rest.len() {
            self.finished = true;
            return None;
        }
        let len = scan::element(self.rest, usize::MAX).ok()?;
        let element = JsonElement::from_certified(&self.rest[..len], self.offset)?;
        if self.rest.get(len) == Some(&b',') {
            self.rest = &self.rest[len + 1..];
            self.offset += len + 1;
        } else {
            self.finished = true;
        }
        Some(element)
    }
}
