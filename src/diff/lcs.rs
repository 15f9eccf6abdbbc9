//! LCS diff algorithm.
//!
//! * time: `O(NM)`
//! * space: `O(NM)`

use crate::diff::{DiffUnit, raw_operation::RawOperation};

/// Diff `original` and `variant` by backtracking through the table of longest
/// common subsequence lengths. When a unit could either be inserted or
/// deleted with the same outcome, the insertion comes first.
///
/// The returned `RawOperation`-s each wrap a single unit tagged with its
/// index in `original`. Inserted units are tagged with the index of the
/// original unit they precede.
pub fn lcs_diff<O, V>(original: &[O], variant: &[V]) -> Vec<RawOperation>
where
    O: AsRef<str>,
    V: AsRef<str>,
{
    let table = LcsTable::new(original, variant);

    let mut result = Vec::with_capacity(original.len().max(variant.len()));
    let mut i = 0;
    let mut j = 0;

    while i < original.len() || j < variant.len() {
        if i < original.len() && j < variant.len() && original[i].as_ref() == variant[j].as_ref() {
            result.push(RawOperation::Equal(vec![DiffUnit::new(
                i,
                original[i].as_ref(),
            )]));
            i += 1;
            j += 1;
        } else if j < variant.len()
            && (i == original.len() || table.get(i, j + 1) >= table.get(i + 1, j))
        {
            result.push(RawOperation::Insert(vec![DiffUnit::new(
                i,
                variant[j].as_ref(),
            )]));
            j += 1;
        } else {
            result.push(RawOperation::Delete(vec![DiffUnit::new(
                i,
                original[i].as_ref(),
            )]));
            i += 1;
        }
    }

    debug_assert!(
        result.iter().all(|operation| operation.units().len() == 1),
        "All operations must be of length 1"
    );

    result
}

/// `get(i, j)` is the length of the longest common subsequence of
/// `original[i..]` and `variant[j..]`.
#[derive(Debug)]
struct LcsTable {
    columns: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn new<O, V>(original: &[O], variant: &[V]) -> Self
    where
        O: AsRef<str>,
        V: AsRef<str>,
    {
        let columns = variant.len() + 1;
        let mut table = LcsTable {
            columns,
            cells: vec![0; (original.len() + 1) * columns],
        };

        for i in (0..original.len()).rev() {
            for j in (0..variant.len()).rev() {
                let length = if original[i].as_ref() == variant[j].as_ref() {
                    table.get(i + 1, j + 1) + 1
                } else {
                    table.get(i + 1, j).max(table.get(i, j + 1))
                };

                table.cells[i * columns + j] = length;
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize { self.cells[i * self.columns + j] }
}
