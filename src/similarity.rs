//! Normalised edit-distance between two text fragments.

/// Levenshtein distance between `a` and `b` counted in characters, with unit
/// cost for insertions, deletions and substitutions.
///
/// * time: `O(NM)`
/// * space: `O(M)`
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();

    let mut previous_row: Vec<usize> = (0..=b.len()).collect();
    let mut current_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        current_row[0] = i + 1;

        for (j, b_char) in b.iter().enumerate() {
            current_row[j + 1] = if a_char == *b_char {
                previous_row[j]
            } else {
                1 + previous_row[j].min(previous_row[j + 1]).min(current_row[j])
            };
        }

        std::mem::swap(&mut previous_row, &mut current_row);
    }

    previous_row[b.len()]
}

/// Similarity ratio of `a` and `b` in `[0, 1]` where `1` means identical.
/// It is `1 - levenshtein(a, b) / max(len(a), len(b))` and two empty strings
/// are identical.
///
/// ```
/// use note_merge::similarity;
///
/// assert_eq!(similarity("kitten", "kitten"), 1.0);
/// assert_eq!(similarity("there", "brave"), 0.2);
/// assert_eq!(similarity("", "abc"), 0.0);
/// ```
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    // Same as `1 - distance / longest`, without the rounding error of the
    // subtraction.
    (longest - levenshtein(a, b)) as f64 / longest as f64
}
