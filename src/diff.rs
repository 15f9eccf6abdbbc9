mod diff_operation;
mod group_operations;
mod lcs;
mod raw_operation;

pub use diff_operation::{DiffKind, DiffOperation, DiffUnit};

use self::{group_operations::group_operations, lcs::lcs_diff};

/// Diff an `original` sequence of text units against a `variant` of it.
///
/// Every unit of `original` is covered exactly once by an `Equal`, `Delete`
/// or the removed side of an `Edit` run, in order. The output is
/// deterministic.
///
/// ```
/// use note_merge::{DiffKind, diff};
///
/// let operations = diff(&["a", "b", "c"], &["a", "x", "c", "d"]);
/// let kinds: Vec<DiffKind> = operations.iter().map(|operation| operation.kind()).collect();
///
/// assert_eq!(
///     kinds,
///     vec![DiffKind::Equal, DiffKind::Edit, DiffKind::Equal, DiffKind::Insert]
/// );
/// ```
#[must_use]
pub fn diff<O, V>(original: &[O], variant: &[V]) -> Vec<DiffOperation>
where
    O: AsRef<str>,
    V: AsRef<str>,
{
    group_operations(lcs_diff(original, variant))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_diff_identical() {
        assert_eq!(
            diff(&["a", "b"], &["a", "b"]),
            vec![DiffOperation::Equal(vec![
                DiffUnit::new(0, "a"),
                DiffUnit::new(1, "b")
            ])]
        );
    }

    #[test]
    fn test_diff_replacement() {
        assert_eq!(
            diff(&["The cat sat."], &["The cat sat on the mat."]),
            vec![DiffOperation::Edit {
                inserted: vec![DiffUnit::new(0, "The cat sat on the mat.")],
                removed: vec![DiffUnit::new(0, "The cat sat.")],
            }]
        );
    }

    #[test]
    fn test_diff_is_deterministic() {
        let original = ["one", "two", "three", "two", "one"];
        let variant = ["two", "one", "three", "one", "two"];

        assert_eq!(diff(&original, &variant), diff(&original, &variant));
    }

    #[test]
    fn test_diff_covers_every_original_unit_once() {
        let original = ["a", "b", "c", "d", "e"];
        let variant = ["b", "x", "d", "y", "z", "e", "f"];

        let covered: Vec<usize> = diff(&original, &variant)
            .iter()
            .flat_map(|operation| match operation {
                DiffOperation::Equal(units) | DiffOperation::Delete(units) => units.as_slice(),
                DiffOperation::Edit { removed, .. } => removed.as_slice(),
                DiffOperation::Insert(..) => &[],
            })
            .map(|unit| unit.original_index)
            .collect();

        assert_eq!(covered, vec![0, 1, 2, 3, 4]);
    }
}
