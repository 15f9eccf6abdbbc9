use log::debug;

use crate::{Granularity, MergeConfig, merge::three_way_merge::three_way_merge};

/// Resolve two conflicting changes to the same unit of `original` found at
/// `depth`.
///
/// Below the terminal granularity, the three texts are split into the units
/// of the next finer level and merged again. At the terminal granularity,
/// the configured `LeafPolicy` decides which text survives.
///
/// Returns the merged text and the trimmed, non-blank fragments that were
/// discarded. If a conflict had to be settled word by word, the whole
/// losing sentence is reported instead of the discarded words.
///
/// ```
/// use note_merge::{Granularity, MergeConfig, resolve_conflict};
///
/// let (merged, discarded) = resolve_conflict(
///     Granularity::Sentence,
///     "The cat sat.",
///     "The cat sat down.",
///     "The cat sat up.",
///     &MergeConfig::default(),
/// );
///
/// assert_eq!(merged, "The cat sat down.");
/// assert_eq!(discarded, vec!["The cat sat up."]);
/// ```
#[must_use]
pub fn resolve_conflict(
    depth: Granularity,
    original: &str,
    current: &str,
    proposed: &str,
    config: &MergeConfig,
) -> (String, Vec<String>) {
    let Some(finer) = depth.finer() else {
        let (text, discarded) = config.leaf_policy().resolve(current, proposed);
        if !discarded.is_empty() {
            debug!(
                "Unresolvable conflict, keeping {text:?} and discarding {discarded:?} \
                 ({:?})",
                config.leaf_policy()
            );
        }

        return (text, discarded);
    };

    let (merged, discarded) = three_way_merge(
        finer,
        &finer.split(original),
        &finer.split(current),
        &finer.split(proposed),
        config,
    );

    let discarded = if finer.is_terminal() && !discarded.is_empty() {
        let (_, whole_sentence) = config.leaf_policy().resolve(current, proposed);
        whole_sentence
    } else {
        discarded
    };

    (
        finer.join(&merged),
        discarded
            .iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
    )
}
