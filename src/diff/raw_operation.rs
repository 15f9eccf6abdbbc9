use crate::diff::DiffUnit;

/// Diff step containing the affected `DiffUnit`-s.
///
/// The LCS backtrack yields one unit per operation, subsequent operations of
/// the same kind are then joined into runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawOperation {
    Insert(Vec<DiffUnit>),
    Delete(Vec<DiffUnit>),
    Equal(Vec<DiffUnit>),
}

impl RawOperation {
    pub fn units(&self) -> &Vec<DiffUnit> {
        match self {
            RawOperation::Insert(units)
            | RawOperation::Delete(units)
            | RawOperation::Equal(units) => units,
        }
    }

    pub fn is_same_kind(&self, other: &RawOperation) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Extends the operation with another operation. Only operations of the
    /// same kind as self can be used to extend self.
    pub fn join(self, other: RawOperation) -> RawOperation {
        debug_assert!(
            self.is_same_kind(&other),
            "Cannot join operations of different kinds. This should have been handled before \
             calling this function."
        );

        match (self, other) {
            (RawOperation::Insert(units), RawOperation::Insert(other_units)) => {
                RawOperation::Insert(units.into_iter().chain(other_units).collect())
            }
            (RawOperation::Delete(units), RawOperation::Delete(other_units)) => {
                RawOperation::Delete(units.into_iter().chain(other_units).collect())
            }
            (RawOperation::Equal(units), RawOperation::Equal(other_units)) => {
                RawOperation::Equal(units.into_iter().chain(other_units).collect())
            }
            _ => unreachable!("Only operations of the same kind can be joined"),
        }
    }
}
