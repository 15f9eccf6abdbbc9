#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single text unit of a diff together with the index of the unit in the
/// original sequence it corresponds to. Inserted units carry the index of the
/// original unit they were inserted before.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffUnit {
    pub original_index: usize,
    pub text: String,
}

impl DiffUnit {
    #[must_use]
    pub fn new(original_index: usize, text: impl Into<String>) -> Self {
        DiffUnit {
            original_index,
            text: text.into(),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Equal,
    Insert,
    Delete,
    Edit,
}

/// A run of consecutive units sharing the same kind of change between an
/// original sequence and a variant of it.
///
/// An `Edit` is an insertion directly followed by a deletion, in other words,
/// a replacement of `removed` with `inserted`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOperation {
    Equal(Vec<DiffUnit>),
    Insert(Vec<DiffUnit>),
    Delete(Vec<DiffUnit>),
    Edit {
        inserted: Vec<DiffUnit>,
        removed: Vec<DiffUnit>,
    },
}

impl DiffOperation {
    #[must_use]
    pub fn kind(&self) -> DiffKind {
        match self {
            DiffOperation::Equal(..) => DiffKind::Equal,
            DiffOperation::Insert(..) => DiffKind::Insert,
            DiffOperation::Delete(..) => DiffKind::Delete,
            DiffOperation::Edit { .. } => DiffKind::Edit,
        }
    }

    /// The units of the run as they appear in the variant, or for deletions,
    /// as they appeared in the original.
    #[must_use]
    pub fn units(&self) -> &[DiffUnit] {
        match self {
            DiffOperation::Equal(units)
            | DiffOperation::Insert(units)
            | DiffOperation::Delete(units)
            | DiffOperation::Edit {
                inserted: units, ..
            } => units,
        }
    }

    /// The units added by the variant.
    #[must_use]
    pub fn inserted_units(&self) -> &[DiffUnit] {
        match self {
            DiffOperation::Insert(units) | DiffOperation::Edit { inserted: units, .. } => units,
            DiffOperation::Equal(..) | DiffOperation::Delete(..) => &[],
        }
    }

    /// The original units no longer present in the variant.
    #[must_use]
    pub fn removed_units(&self) -> &[DiffUnit] {
        match self {
            DiffOperation::Delete(units) | DiffOperation::Edit { removed: units, .. } => units,
            DiffOperation::Equal(..) | DiffOperation::Insert(..) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unit_accessors() {
        let edit = DiffOperation::Edit {
            inserted: vec![DiffUnit::new(1, "x")],
            removed: vec![DiffUnit::new(1, "b"), DiffUnit::new(2, "c")],
        };

        assert_eq!(edit.units(), [DiffUnit::new(1, "x")]);
        assert_eq!(edit.inserted_units(), [DiffUnit::new(1, "x")]);
        assert_eq!(
            edit.removed_units(),
            [DiffUnit::new(1, "b"), DiffUnit::new(2, "c")]
        );
    }

    #[test]
    fn test_unit_accessors_of_single_sided_runs() {
        let delete = DiffOperation::Delete(vec![DiffUnit::new(0, "a")]);
        let insert = DiffOperation::Insert(vec![DiffUnit::new(0, "z")]);
        let equal = DiffOperation::Equal(vec![DiffUnit::new(0, "a")]);

        assert_eq!(delete.units(), [DiffUnit::new(0, "a")]);
        assert_eq!(delete.removed_units(), [DiffUnit::new(0, "a")]);
        assert!(delete.inserted_units().is_empty());

        assert_eq!(insert.inserted_units(), [DiffUnit::new(0, "z")]);
        assert!(insert.removed_units().is_empty());

        assert_eq!(equal.units(), [DiffUnit::new(0, "a")]);
        assert!(equal.inserted_units().is_empty());
        assert!(equal.removed_units().is_empty());
    }
}
