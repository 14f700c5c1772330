//! Levenshtein edit distance.

/// Compute the edit distance between two strings.
///
/// Returns the minimum number of single-character insertions, deletions and
/// substitutions (all unit cost, no transpositions) needed to turn `a` into
/// `b`. Characters are Unicode scalar values, so a Hangul syllable counts as
/// one character.
///
/// The result equals the classic `(m+1) x (n+1)` dynamic-programming table,
/// but only two rows of the shorter string's width are kept.
///
/// # Examples
/// ```
/// use kpa_scoring::edit_distance;
///
/// assert_eq!(edit_distance("안녕하세요", "안뇽하세요"), 1);
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Rows run over the longer string, columns over the shorter one.
    let (rows, cols) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if cols.is_empty() {
        return rows.len();
    }

    let mut prev: Vec<usize> = (0..=cols.len()).collect();
    let mut curr = vec![0usize; cols.len() + 1];

    for (i, row_char) in rows.iter().enumerate() {
        curr[0] = i + 1;
        for (j, col_char) in cols.iter().enumerate() {
            curr[j + 1] = if row_char == col_char {
                prev[j]
            } else {
                1 + prev[j + 1] // deletion
                    .min(curr[j]) // insertion
                    .min(prev[j]) // substitution
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[cols.len()]
}
