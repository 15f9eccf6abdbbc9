#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of merging two concurrent edits of a note: the merged text and
/// the fragments that could not be merged automatically, in the order they
/// were found.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedText {
    text: String,
    discarded: Vec<String>,
}

impl MergedText {
    #[must_use]
    pub fn new(text: String, discarded: Vec<String>) -> Self { MergedText { text, discarded } }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// Fragments left out of `text()` to resolve conflicts.
    #[must_use]
    pub fn discarded(&self) -> &[String] { &self.discarded }

    #[must_use]
    pub fn has_conflicts(&self) -> bool { !self.discarded.is_empty() }

    #[must_use]
    pub fn into_parts(self) -> (String, Vec<String>) { (self.text, self.discarded) }
}

impl From<MergedText> for String {
    fn from(merged: MergedText) -> Self { merged.text }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_accessors() {
        let merged = MergedText::new("text".to_owned(), vec!["lost".to_owned()]);

        assert_eq!(merged.text(), "text");
        assert_eq!(merged.discarded(), ["lost".to_owned()]);
        assert!(merged.has_conflicts());
        assert!(!MergedText::default().has_conflicts());

        assert_eq!(
            merged.into_parts(),
            ("text".to_owned(), vec!["lost".to_owned()])
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialise() {
        let merged: MergedText =
            serde_yaml::from_str("text: merged note\ndiscarded: [lost sentence]\n").unwrap();

        assert_eq!(merged.text(), "merged note");
        assert_eq!(merged.discarded(), ["lost sentence".to_owned()]);
    }
}
