use crate::utils::split_after_runs::split_after_runs;

/// Splits text on word boundaries, keeping the whitespace after a word
/// attached to it.
///
/// ## Example
///
/// ```not_rust
/// "Hi  there!\n" -> ["Hi  ", "there!\n"]
/// ```
pub fn word_splitter(text: &str) -> Vec<&str> { split_after_runs(text, char::is_whitespace) }
