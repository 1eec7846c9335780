//! Levenshtein edit distance with unit costs.

use crate::matching::grid::RowPair;

/// Edit distance between two residue strings.
///
/// Insertions, deletions and substitutions all cost one; matching residues
/// carry the diagonal unchanged. The result is zero exactly when the inputs
/// are identical, and never exceeds the longer input's length.
#[must_use]
pub fn distance(query: &[u8], candidate: &[u8]) -> usize {
    distance_with_buf(query, candidate, &mut RowPair::new())
}

/// Edit distance using a caller-provided row buffer.
///
/// Scans reuse one buffer across an entire database instead of allocating a
/// grid per candidate.
#[must_use]
pub fn distance_with_buf(query: &[u8], candidate: &[u8], rows: &mut RowPair<usize>) -> usize {
    let cols = candidate.len() + 1;
    // Row zero is the cost of inserting the candidate prefix
    rows.reset(cols, |j| j);

    for (i, &q) in query.iter().enumerate() {
        // Column zero is the cost of deleting the query prefix
        rows.curr[0] = i + 1;
        for (j, &c) in candidate.iter().enumerate() {
            rows.curr[j + 1] = if q == c {
                rows.prev[j]
            } else {
                1 + rows.prev[j].min(rows.prev[j + 1]).min(rows.curr[j])
            };
        }
        rows.advance();
    }

    rows.prev[candidate.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_distance_zero() {
        assert_eq!(distance(b"ACGT", b"ACGT"), 0);
        assert_eq!(distance(b"", b""), 0);
    }

    #[test]
    fn test_empty_against_nonempty() {
        assert_eq!(distance(b"", b"ACGT"), 4);
        assert_eq!(distance(b"ACGT", b""), 4);
    }

    #[test]
    fn test_single_operations() {
        // substitution
        assert_eq!(distance(b"ACGT", b"AGGT"), 1);
        // insertion
        assert_eq!(distance(b"ACGT", b"ACGGT"), 1);
        // deletion
        assert_eq!(distance(b"ACGT", b"AGT"), 1);
    }

    #[test]
    fn test_classic_example() {
        assert_eq!(distance(b"kitten", b"sitting"), 3);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(distance(b"GATTACA", b"GCATGCU"), distance(b"GCATGCU", b"GATTACA"));
    }

    #[test]
    fn test_disjoint_alphabets() {
        // No shared residues: every position must be substituted, plus
        // insertions for the length difference
        assert_eq!(distance(b"AAAA", b"TTTT"), 4);
        assert_eq!(distance(b"AA", b"TTTT"), 4);
    }

    #[test]
    fn test_buffer_reuse_across_calls() {
        let mut rows = RowPair::new();
        assert_eq!(distance_with_buf(b"ACGT", b"ACGT", &mut rows), 0);
        assert_eq!(distance_with_buf(b"ACGT", b"TT", &mut rows), 3);
        assert_eq!(distance_with_buf(b"A", b"GGGGGGGG", &mut rows), 8);
    }
}
