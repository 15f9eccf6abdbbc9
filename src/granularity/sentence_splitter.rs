use crate::utils::split_after_runs::split_after_runs;

/// Splits text into sentences. A sentence ends after a run of `.`, `!` or
/// `?` which stays attached to it, while the whitespace following the
/// terminator starts the next sentence.
///
/// ## Example
///
/// ```not_rust
/// "Hi there! How are you?? Fine" -> ["Hi there!", " How are you??", " Fine"]
/// ```
pub fn sentence_splitter(text: &str) -> Vec<&str> {
    split_after_runs(text, is_sentence_terminator)
}

fn is_sentence_terminator(c: char) -> bool { matches!(c, '.' | '!' | '?') }
