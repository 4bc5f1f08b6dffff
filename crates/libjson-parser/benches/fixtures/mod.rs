pub const SMALL_DOCUMENT: &str = include_str!("small_document.json");
pub const MEDIUM_DOCUMENT: &str = include_str!("medium_document.json");

pub mod documents;
