/// Splits text into lines. The line breaks are not part of the lines, they
/// are restored by joining with `\n`. An empty text is a single empty line.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!\n" -> ["Hello", "World!", ""]
/// "Line 1\r\nLine 2" -> ["Line 1\r", "Line 2"]
/// ```
pub fn line_splitter(text: &str) -> Vec<&str> { text.split('\n').collect() }
