//! Longest common subsequence length.

use crate::matching::grid::RowPair;

/// Length of the longest common subsequence of two residue strings.
///
/// Subsequences need not be contiguous; only relative order matters. Zero
/// means the inputs share no residues at all.
#[must_use]
pub fn subsequence_length(query: &[u8], candidate: &[u8]) -> usize {
    subsequence_length_with_buf(query, candidate, &mut RowPair::new())
}

/// Subsequence length using a caller-provided row buffer
#[must_use]
pub fn subsequence_length_with_buf(
    query: &[u8],
    candidate: &[u8],
    rows: &mut RowPair<usize>,
) -> usize {
    let cols = candidate.len() + 1;
    rows.reset(cols, |_| 0);

    for &q in query {
        rows.curr[0] = 0;
        for (j, &c) in candidate.iter().enumerate() {
            rows.curr[j + 1] = if q == c {
                rows.prev[j] + 1
            } else {
                rows.prev[j + 1].max(rows.curr[j])
            };
        }
        rows.advance();
    }

    rows.prev[candidate.len()]
}
