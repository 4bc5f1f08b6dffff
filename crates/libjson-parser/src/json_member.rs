use crate::JsonValue;

/// One object member: a string key and its value.
///
/// Produced by [`MemberIter`](crate::MemberIter) when re-deriving an
/// object's interior. The key is always a `String`-typed value whose span
/// includes the delimiting quotes; use
/// [`string_bytes`](crate::JsonValue::string_bytes) for the interior.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JsonMember<'src> {
    pub key: JsonValue<'src>,
    pub value: JsonValue<'src>,
}
