use crate::diff::{DiffOperation, raw_operation::RawOperation};

/// Groups single-unit operations into runs of the same kind, then turns every
/// insertion run directly followed by a deletion run into an edit.
pub fn group_operations<I>(raw_operations: I) -> Vec<DiffOperation>
where
    I: IntoIterator<Item = RawOperation>,
{
    let runs = raw_operations
        .into_iter()
        .fold(Vec::<RawOperation>::new(), |mut runs, next| {
            match runs.pop() {
                Some(previous) if previous.is_same_kind(&next) => runs.push(previous.join(next)),
                Some(previous) => runs.extend([previous, next]),
                None => runs.push(next),
            }

            runs
        });

    let mut result = Vec::with_capacity(runs.len());
    let mut runs = runs.into_iter().peekable();

    while let Some(run) = runs.next() {
        let operation = match run {
            RawOperation::Equal(units) => DiffOperation::Equal(units),
            RawOperation::Delete(units) => DiffOperation::Delete(units),
            RawOperation::Insert(inserted) => {
                match runs.next_if(|next| matches!(next, RawOperation::Delete(..))) {
                    Some(RawOperation::Delete(removed)) => {
                        DiffOperation::Edit { inserted, removed }
                    }
                    _ => DiffOperation::Insert(inserted),
                }
            }
        };

        result.push(operation);
    }

    result
}
