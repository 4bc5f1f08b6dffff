//! Synthetic document generators for benchmarking shapes that would be
//! unwieldy as checked-in fixtures.

/// Builds `depth` nested arrays around a single scalar: `[[[...1...]]]`.
pub fn deeply_nested_array(depth: usize) -> String {
    format!("{}1{}", "[".repeat(depth), "]".repeat(depth))
}

/// Builds a flat array of `count` integers.
pub fn wide_integer_array(count: usize) -> String {
    let items: Vec<String> = (0..count).map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Builds an object with `count` small members.
pub fn wide_object(count: usize) -> String {
    let members: Vec<String> = (0..count)
        .map(|i| format!(r#""key{i}": {i}"#))
        .collect();
    format!("{{{}}}", members.join(", "))
}

/// Builds a string document of `len` escape-free ASCII bytes, the string
/// scanner's fast path.
pub fn long_plain_string(len: usize) -> String {
    format!("\"{}\"", "x".repeat(len))
}

/// Builds a string document of `count` escape sequences, the string
/// scanner's slow path.
pub fn long_escaped_string(count: usize) -> String {
    format!("\"{}\"", "\\n".repeat(count))
}
