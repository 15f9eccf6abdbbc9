mod alignment;
mod conflict_resolver;
mod merged_text;
mod three_way_merge;

pub use conflict_resolver::resolve_conflict;
pub use merged_text::MergedText;
pub use three_way_merge::three_way_merge;

use crate::{Granularity, MergeConfig};

/// Given the `original` text of a note and two concurrent edits of it, the
/// `current` text held by the store and a newly `proposed` one, return a note
/// containing the changes of both sides.
///
/// Changes made by a single side are applied. Conflicting changes to the
/// same line are merged sentence by sentence and word by word as long as
/// they are similar, dissimilar changes are both kept with the current one
/// first. Whatever had to be left out of the merged text is returned in
/// `MergedText::discarded`, so no edit is lost silently.
///
/// ```
/// use note_merge::merge_text;
///
/// let merged = merge_text("Hello world", "Hello there world", "Hello brave world");
///
/// assert_eq!(merged.text(), "Hello there brave world");
/// assert!(!merged.has_conflicts());
/// ```
#[must_use]
pub fn merge_text(original: &str, current: &str, proposed: &str) -> MergedText {
    merge_text_with_config(original, current, proposed, &MergeConfig::default())
}

/// Same as `merge_text` but with a custom similarity threshold and leaf
/// policy.
#[must_use]
pub fn merge_text_with_config(
    original: &str,
    current: &str,
    proposed: &str,
    config: &MergeConfig,
) -> MergedText {
    if current == proposed || original == proposed {
        return MergedText::new(current.to_owned(), Vec::new());
    }

    if original == current {
        return MergedText::new(proposed.to_owned(), Vec::new());
    }

    let granularity = Granularity::File;
    let (merged, discarded) = three_way_merge(
        granularity,
        &granularity.split(original),
        &granularity.split(current),
        &granularity.split(proposed),
        config,
    );

    MergedText::new(granularity.join(&merged), discarded)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::LeafPolicy;

    #[test_case("" ; "empty")]
    #[test_case("single line" ; "single line")]
    #[test_case("Title\n\nFirst sentence. Second one!\n" ; "multiple paragraphs")]
    fn test_identity(text: &str) {
        assert_eq!(
            merge_text(text, text, text),
            MergedText::new(text.to_owned(), vec![])
        );
    }

    #[test_case("a\nb", "a\nb\nc" ; "append")]
    #[test_case("a\nb", "" ; "clear")]
    #[test_case("", "new note" ; "from empty")]
    fn test_fast_forward(original: &str, edited: &str) {
        assert_eq!(merge_text(original, original, edited).text(), edited);
        assert_eq!(merge_text(original, edited, original).text(), edited);
        assert_eq!(merge_text(original, edited, edited).text(), edited);
    }

    #[test]
    fn test_appended_sentence() {
        let merged = merge_text("The cat sat.", "The cat sat on the mat.", "The cat sat.");

        assert_eq!(merged.text(), "The cat sat on the mat.");
        assert_eq!(merged.discarded(), &[] as &[String]);
    }

    #[test]
    fn test_concurrent_insertions_are_both_kept() {
        let merged = merge_text("Hello world", "Hello there world", "Hello brave world");

        assert_eq!(merged.text(), "Hello there brave world");
        assert!(!merged.has_conflicts());
    }

    #[test]
    fn test_changes_to_different_lines() {
        let merged = merge_text(
            "# Groceries\nmilk\neggs",
            "# Groceries\noat milk\neggs",
            "# Groceries\nmilk\neggs\nbread",
        );

        assert_eq!(merged.text(), "# Groceries\noat milk\neggs\nbread");
        assert!(!merged.has_conflicts());
    }

    #[test]
    fn test_dissimilar_lines_are_both_kept() {
        let merged = merge_text("todo", "buy milk", "call Jo");

        insta::assert_snapshot!(merged.text(), @r"
        buy milk
        call Jo
        ");
        assert!(!merged.has_conflicts());
    }

    #[test]
    fn test_conflicting_words_are_discarded_visibly() {
        let merged = merge_text("The fox.", "The quick fox.", "The quiet fox.");

        assert_eq!(merged.text(), "The quick fox.");
        assert_eq!(merged.discarded(), ["The quiet fox.".to_owned()]);
    }

    #[test]
    fn test_leaf_policy_keep_proposed() {
        let config = MergeConfig::default().with_leaf_policy(LeafPolicy::KeepProposed);
        let merged =
            merge_text_with_config("The fox.", "The quick fox.", "The quiet fox.", &config);

        assert_eq!(merged.text(), "The quiet fox.");
        assert_eq!(merged.discarded(), ["The quick fox.".to_owned()]);
    }

    #[test]
    fn test_strict_threshold_keeps_both_lines() {
        let config = MergeConfig::default()
            .with_similarity_threshold(1.0)
            .unwrap();
        let merged =
            merge_text_with_config("The fox.", "The quick fox.", "The quiet fox.", &config);

        assert_eq!(merged.text(), "The quick fox.\nThe quiet fox.");
        assert!(!merged.has_conflicts());
    }

    #[test]
    fn test_merges_on_many_threads() {
        let expected = merge_text("a\nb\nc", "a\nB\nc", "a\nb\nC");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| merge_text("a\nb\nc", "a\nB\nc", "a\nb\nC")))
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });

        assert_eq!(expected.text(), "a\nB\nC");
    }
}
