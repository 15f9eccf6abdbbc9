/// Splits `text` after every maximal run of characters matching
/// `is_delimiter`. The delimiters stay attached to the preceding piece, so
/// concatenating the pieces gives back `text`.
///
/// ## Example
///
/// ```not_rust
/// split_after_runs("a..b.c", |c| c == '.') -> ["a..", "b.", "c"]
/// ```
pub fn split_after_runs(text: &str, is_delimiter: impl Fn(char) -> bool) -> Vec<&str> {
    let mut result = Vec::new();
    let mut piece_start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let is_end_of_run =
            is_delimiter(c) && chars.peek().is_none_or(|&(_, next)| !is_delimiter(next));

        if is_end_of_run {
            let piece_end = i + c.len_utf8();
            result.push(&text[piece_start..piece_end]);
            piece_start = piece_end;
        }
    }

    if piece_start < text.len() {
        result.push(&text[piece_start..]);
    }

    result
}
