use super::classify::is_whitespace;

/// Consumes the maximal leading run of insignificant whitespace.
///
/// Never fails; returns 0 on no match or empty input. This is the `ws` in
/// the grammar's `ws value ws` element rule, and one of the productions for
/// which zero bytes is a legal (epsilon) match.
pub fn whitespace(buf: &[u8]) -> usize {
    buf.iter().take_while(|&&b| is_whitespace(b)).count()
}
