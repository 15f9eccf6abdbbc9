use std::cmp::Ordering;

use crate::{
    diff::{DiffOperation, DiffUnit},
    utils::side::Side,
};

/// What one side did to a single unit of the original sequence, or what it
/// inserted between two original units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitChange {
    Kept(String),
    Deleted,
    Replaced(String),
    Inserted(String),
}

/// One side's change tagged with the position in the original sequence it
/// belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PositionedChange {
    original_index: usize,
    change: UnitChange,
}

impl PositionedChange {
    fn new(original_index: usize, change: UnitChange) -> Self {
        PositionedChange {
            original_index,
            change,
        }
    }

    fn is_insertion(&self) -> bool { matches!(self.change, UnitChange::Inserted(..)) }
}

/// A position-matched triple of an original unit and the changes both sides
/// made to it. Rows of insertions have no original unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow<'a> {
    pub original_index: usize,
    pub original: Option<&'a str>,
    pub current: Option<UnitChange>,
    pub proposed: Option<UnitChange>,
}

impl AlignedRow<'_> {
    /// Whether the row only holds text inserted between original units.
    #[must_use]
    pub fn is_insertion(&self) -> bool {
        self.original.is_none()
            && [&self.current, &self.proposed]
                .into_iter()
                .flatten()
                .all(|change| matches!(change, UnitChange::Inserted(..)))
    }
}

/// Merges the diff of `original` to current and the diff of `original` to
/// proposed into rows ordered by their position in `original`.
///
/// Both diffs cover every original unit once, so each original unit ends up in
/// a single row with both sides' changes. Insertions come before the
/// original unit they precede; concurrent insertions at the same position are
/// paired up in order.
#[must_use]
pub fn align<'a, S>(
    original: &'a [S],
    current_operations: Vec<DiffOperation>,
    proposed_operations: Vec<DiffOperation>,
) -> Vec<AlignedRow<'a>>
where
    S: AsRef<str>,
{
    let mut current = flatten(current_operations).into_iter().peekable();
    let mut proposed = flatten(proposed_operations).into_iter().peekable();

    let mut rows = Vec::new();

    loop {
        // `None` advances both sides
        let single_side = match (current.peek(), proposed.peek()) {
            (None, None) => break,
            (Some(_), None) => Some(Side::Current),
            (None, Some(_)) => Some(Side::Proposed),
            (Some(current_head), Some(proposed_head)) => {
                match current_head
                    .original_index
                    .cmp(&proposed_head.original_index)
                {
                    Ordering::Less => Some(Side::Current),
                    Ordering::Greater => Some(Side::Proposed),
                    Ordering::Equal => {
                        match (current_head.is_insertion(), proposed_head.is_insertion()) {
                            (true, false) => Some(Side::Current),
                            (false, true) => Some(Side::Proposed),
                            (true, true) | (false, false) => None,
                        }
                    }
                }
            }
        };

        let (current_change, proposed_change) = match single_side {
            Some(Side::Current) => (current.next(), None),
            Some(Side::Proposed) => (None, proposed.next()),
            None => (current.next(), proposed.next()),
        };

        let Some(head) = current_change.as_ref().or(proposed_change.as_ref()) else {
            break;
        };
        let original_index = head.original_index;
        let original_unit = if head.is_insertion() {
            None
        } else {
            original.get(original_index).map(AsRef::as_ref)
        };

        rows.push(AlignedRow {
            original_index,
            original: original_unit,
            current: current_change.map(|change| change.change),
            proposed: proposed_change.map(|change| change.change),
        });
    }

    rows
}

/// Breaks runs into one change per unit. The units of an edit are paired up:
/// inserted units replace removed ones in order, surplus removed units are
/// deleted and surplus inserted units are inserted after the last removed one.
fn flatten(operations: Vec<DiffOperation>) -> Vec<PositionedChange> {
    let mut result = Vec::with_capacity(operations.len());

    for operation in operations {
        match operation {
            DiffOperation::Equal(units) => result.extend(units.into_iter().map(|unit| {
                PositionedChange::new(unit.original_index, UnitChange::Kept(unit.text))
            })),
            DiffOperation::Delete(units) => result.extend(
                units
                    .into_iter()
                    .map(|unit| PositionedChange::new(unit.original_index, UnitChange::Deleted)),
            ),
            DiffOperation::Insert(units) => result.extend(units.into_iter().map(|unit| {
                PositionedChange::new(unit.original_index, UnitChange::Inserted(unit.text))
            })),
            DiffOperation::Edit { inserted, removed } => {
                let next_original_index = removed
                    .last()
                    .map_or(0, |unit: &DiffUnit| unit.original_index + 1);
                let mut inserted = inserted.into_iter();

                for unit in removed {
                    let change = inserted
                        .next()
                        .map_or(UnitChange::Deleted, |replacement| {
                            UnitChange::Replaced(replacement.text)
                        });
                    result.push(PositionedChange::new(unit.original_index, change));
                }

                result.extend(inserted.map(|unit| {
                    PositionedChange::new(next_original_index, UnitChange::Inserted(unit.text))
                }));
            }
        }
    }

    result
}
