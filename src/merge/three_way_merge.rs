use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    Granularity, MergeConfig,
    diff::diff,
    merge::{
        alignment::{AlignedRow, UnitChange, align},
        conflict_resolver::resolve_conflict,
    },
    similarity::similarity,
};

/// What one side of an aligned row did, seen from the original unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classified<'a> {
    Unchanged,
    Deleted,
    Changed(&'a str),
}

impl<'a> From<Option<&'a UnitChange>> for Classified<'a> {
    fn from(change: Option<&'a UnitChange>) -> Self {
        match change {
            None | Some(UnitChange::Kept(..)) => Classified::Unchanged,
            Some(UnitChange::Deleted) => Classified::Deleted,
            Some(UnitChange::Replaced(text) | UnitChange::Inserted(text)) => {
                Classified::Changed(text)
            }
        }
    }
}

/// Merge the `current` and `proposed` sequences of units, both derived from
/// `original`, at the given `depth`.
///
/// Returns the merged units and the fragments that had to be discarded to
/// resolve conflicts. Changes made by only one side are applied, identical
/// changes are applied once. When both sides change the same unit
/// differently, similar enough changes are merged again at a finer
/// granularity while dissimilar ones are both kept, current first.
///
/// ```
/// use note_merge::{Granularity, MergeConfig, three_way_merge};
///
/// let (merged, discarded) = three_way_merge(
///     Granularity::File,
///     &["milk", "eggs"],
///     &["milk", "eggs", "bread"],
///     &["oat milk", "eggs"],
///     &MergeConfig::default(),
/// );
///
/// assert_eq!(merged, vec!["oat milk", "eggs", "bread"]);
/// assert!(discarded.is_empty());
/// ```
#[must_use]
pub fn three_way_merge<O, C, P>(
    depth: Granularity,
    original: &[O],
    current: &[C],
    proposed: &[P],
    config: &MergeConfig,
) -> (Vec<String>, Vec<String>)
where
    O: AsRef<str>,
    C: AsRef<str>,
    P: AsRef<str>,
{
    let current_operations = diff(original, current);
    let proposed_operations = diff(original, proposed);

    let proposed_insertions: HashSet<String> = proposed_operations
        .iter()
        .flat_map(|operation| operation.inserted_units())
        .map(|unit| unit.text.clone())
        .collect();

    let rows = align(original, current_operations, proposed_operations);

    let mut merged = Vec::with_capacity(rows.len());
    let mut discarded = Vec::new();

    for row in &rows {
        let current_change = Classified::from(row.current.as_ref());
        let proposed_change = Classified::from(row.proposed.as_ref());

        trace!(
            "{depth:?} row {}: current {current_change:?}, proposed {proposed_change:?}",
            row.original_index
        );

        match (current_change, proposed_change) {
            (Classified::Unchanged, Classified::Unchanged) => {
                if let Some(original) = row.original {
                    merged.push(original.to_owned());
                }
            }

            (Classified::Unchanged | Classified::Deleted, Classified::Changed(text)) => {
                merged.push(text.to_owned());
            }

            (Classified::Changed(text), Classified::Unchanged) => {
                if is_duplicate_insertion(row, text, &proposed_insertions) {
                    trace!("Dropping {text:?} which has been inserted by the proposed side too");
                } else {
                    merged.push(text.to_owned());
                }
            }

            (Classified::Changed(text), Classified::Deleted) => merged.push(text.to_owned()),

            (Classified::Deleted | Classified::Unchanged, Classified::Deleted)
            | (Classified::Deleted, Classified::Unchanged) => {}

            (Classified::Changed(current_text), Classified::Changed(proposed_text)) => {
                if current_text == proposed_text {
                    merged.push(current_text.to_owned());
                } else {
                    let (text, conflict_discarded) = merge_conflicting_changes(
                        depth,
                        row.original.unwrap_or_default(),
                        current_text,
                        proposed_text,
                        config,
                    );

                    merged.extend(text);
                    discarded.extend(conflict_discarded);
                }
            }
        }
    }

    (merged, discarded)
}

/// A unit only the current side inserted is dropped if the proposed side
/// inserted the exact same text anywhere.
fn is_duplicate_insertion(
    row: &AlignedRow<'_>,
    text: &str,
    proposed_insertions: &HashSet<String>,
) -> bool {
    row.proposed.is_none() && row.is_insertion() && proposed_insertions.contains(text)
}

fn merge_conflicting_changes(
    depth: Granularity,
    original: &str,
    current: &str,
    proposed: &str,
    config: &MergeConfig,
) -> (Vec<String>, Vec<String>) {
    // Splitters leave delimiters attached to the units
    let score = similarity(current.trim(), proposed.trim());

    if score >= config.similarity_threshold() {
        debug!(
            "Conflicting {depth:?} changes {current:?} and {proposed:?} are similar ({score:.2}), \
             merging them at a finer granularity"
        );

        let (text, discarded) = resolve_conflict(depth, original, current, proposed, config);
        (vec![text], discarded)
    } else {
        debug!(
            "Conflicting {depth:?} changes {current:?} and {proposed:?} are dissimilar \
             ({score:.2}), keeping both"
        );

        (keep_both(depth, current, proposed), Vec::new())
    }
}

/// Keeps `current` followed by `proposed`. Sentences and words are joined
/// without a separator, so a space is added if neither side brings its own
/// whitespace.
fn keep_both(depth: Granularity, current: &str, proposed: &str) -> Vec<String> {
    let needs_space = !depth.has_separator()
        && !current.is_empty()
        && !current.ends_with(char::is_whitespace)
        && !proposed.starts_with(char::is_whitespace);

    if needs_space {
        vec![format!("{current} "), proposed.to_owned()]
    } else {
        vec![current.to_owned(), proposed.to_owned()]
    }
}
