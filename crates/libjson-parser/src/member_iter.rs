use crate::JsonElement;
use crate::JsonMember;
use crate::JsonSpan;
use crate::JsonSpanKind;
use crate::JsonType;
use crate::JsonValue;
use crate::scan;

/// Iterator over the members of an object's interior.
///
/// Re-derives each `ws string ws ':' element` member by re-running the
/// scanners over the certified span. Allocation-free, like
/// [`ElementIter`](crate::ElementIter).
#[derive(Clone, Debug)]
pub struct MemberIter<'src> {
    /// Unvisited interior bytes (between `{` and `}`, commas included).
    rest: &'src [u8],
    /// Absolute offset of `rest[0]` in the input buffer.
    offset: usize,
    finished: bool,
}

impl<'src> MemberIter<'src> {
    pub(crate) fn new(interior: &'src [u8], offset: usize) -> Self {
        Self {
            rest: interior,
            offset,
            finished: false,
        }
    }
}

impl<'src> Iterator for MemberIter<'src> {
    type Item = JsonMember<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if scan::whitespace(self.rest) == self.rest.len() {
            self.finished = true;
            return None;
        }

        let key_start = scan::whitespace(self.rest);
        let key_len = scan::string(&self.rest[key_start..]).ok()?;
        let key = JsonValue::new(
            JsonType::String,
            JsonSpan::new(
                JsonSpanKind::String,
                &self.rest[key_start..key_start + key_len],
                self.offset + key_start,
            ),
        );

        let mut cursor = key_start + key_len;
        cursor += scan::whitespace(&self.rest[cursor..]);
        if self.rest.get(cursor) != Some(&b':') {
            return None;
        }
        cursor += 1;

        let element_len = scan::element(&self.rest[cursor..], usize::MAX).ok()?;
        let element = JsonElement::from_certified(
            &self.rest[cursor..cursor + element_len],
            self.offset + cursor,
        )?;
        let member_end = cursor + element_len;

        if self.rest.get(member_end) == Some(&b',') {
            self.rest = &self.rest[member_end + 1..];
            self.offset += member_end + 1;
        } else {
            self.finished = true;
        }

        Some(JsonMember {
            key,
            value: *element.value(),
        })
    }
}
